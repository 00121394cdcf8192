use serde_json::Value;

/// Recursively overlays `overlay` onto `base`.
///
/// - object onto object: merged key by key, recursing into nested objects
/// - `null` in the overlay: treated as absent, the base value is kept
/// - anything else: the overlay value replaces the base value as-is
///
/// Total: never fails, whatever the shapes involved.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (_, Value::Null) => base.clone(),
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            let mut merged = base_map.clone();
            for (key, over) in overlay_map {
                let next = match base_map.get(key) {
                    Some(existing) => deep_merge(existing, over),
                    None if over.is_null() => continue,
                    None => over.clone(),
                };
                merged.insert(key.clone(), next);
            }
            Value::Object(merged)
        }
        _ => overlay.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_leaf_override_keeps_siblings() {
        let base = json!({ "text": { "primary": "#000", "secondary": "#555" } });
        let overlay = json!({ "text": { "primary": "#111" } });
        assert_eq!(
            deep_merge(&base, &overlay),
            json!({ "text": { "primary": "#111", "secondary": "#555" } })
        );
    }

    #[test]
    fn test_null_overlay_is_absent() {
        let base = json!({ "a": 1, "b": { "c": 2 } });
        assert_eq!(deep_merge(&base, &json!({ "a": null, "b": null })), base);
        assert_eq!(deep_merge(&base, &Value::Null), base);
    }

    #[test]
    fn test_scalar_replaces_object_and_vice_versa() {
        assert_eq!(
            deep_merge(&json!({ "a": { "b": 1 } }), &json!({ "a": 5 })),
            json!({ "a": 5 })
        );
        assert_eq!(
            deep_merge(&json!({ "a": 5 }), &json!({ "a": { "b": 1 } })),
            json!({ "a": { "b": 1 } })
        );
    }

    #[test]
    fn test_arrays_replace_wholesale() {
        assert_eq!(
            deep_merge(&json!({ "tags": [1, 2, 3] }), &json!({ "tags": [9] })),
            json!({ "tags": [9] })
        );
    }

    #[test]
    fn test_new_keys_are_added() {
        assert_eq!(
            deep_merge(&json!({ "a": 1 }), &json!({ "b": 2, "c": null })),
            json!({ "a": 1, "b": 2 })
        );
    }

    #[test]
    fn test_inputs_untouched() {
        let base = json!({ "a": { "b": 1 } });
        let overlay = json!({ "a": { "b": 2 } });
        let _ = deep_merge(&base, &overlay);
        assert_eq!(base, json!({ "a": { "b": 1 } }));
        assert_eq!(overlay, json!({ "a": { "b": 2 } }));
    }
}
