//! Section-item classification.
//!
//! Items arrive as untyped JSON (imported or hand-edited), so each one is
//! resolved to a concrete shape before rendering:
//!
//! 1. An explicit `kind` tag wins when the item actually reads as that kind.
//! 2. Otherwise the structural rules in [`RULES`] are tried in order; the first
//!    match decides. Order matters: a project and a certification can both
//!    carry `name`, and only the project rule looks at `technologies`.
//!
//! Items matching nothing are dropped by the caller, never rendered blank.

use serde_json::{Map, Value};
use tracing::debug;

use crate::sections::items::{ItemKind, SectionItem};

type Fields = Map<String, Value>;

pub struct ClassificationRule {
    pub kind: ItemKind,
    pub matches: fn(&Fields) -> bool,
}

/// Structural rules in priority order.
pub static RULES: [ClassificationRule; 6] = [
    ClassificationRule {
        kind: ItemKind::Experience,
        matches: is_experience,
    },
    ClassificationRule {
        kind: ItemKind::Education,
        matches: is_education,
    },
    ClassificationRule {
        kind: ItemKind::Skills,
        matches: is_skills,
    },
    ClassificationRule {
        kind: ItemKind::Project,
        matches: is_project,
    },
    ClassificationRule {
        kind: ItemKind::Certification,
        matches: is_certification,
    },
    ClassificationRule {
        kind: ItemKind::Custom,
        matches: is_custom,
    },
];

fn has(fields: &Fields, key: &str) -> bool {
    fields.contains_key(key)
}

fn is_experience(f: &Fields) -> bool {
    has(f, "company") && has(f, "position")
}

fn is_education(f: &Fields) -> bool {
    has(f, "institution") && has(f, "degree")
}

fn is_skills(f: &Fields) -> bool {
    has(f, "category") && f.get("skills").is_some_and(Value::is_array)
}

fn is_project(f: &Fields) -> bool {
    has(f, "name") && has(f, "technologies")
}

// Relies on the absence of `technologies`; see is_project.
fn is_certification(f: &Fields) -> bool {
    has(f, "name") && has(f, "issuer") && !has(f, "technologies")
}

fn is_custom(f: &Fields) -> bool {
    has(f, "title")
        && !["company", "institution", "category", "technologies", "issuer"]
            .iter()
            .any(|k| has(f, k))
}

/// The structural kind of `item`, ignoring any explicit tag.
pub fn structural_kind(item: &Value) -> Option<ItemKind> {
    let fields = item.as_object()?;
    RULES
        .iter()
        .find(|rule| (rule.matches)(fields))
        .map(|rule| rule.kind)
}

/// Resolves an untyped item to a typed [`SectionItem`], or `None` if it should be skipped.
pub fn classify_item(item: &Value) -> Option<SectionItem> {
    let fields = item.as_object()?;

    if let Some(tagged) = fields
        .get("kind")
        .and_then(Value::as_str)
        .and_then(ItemKind::from_tag)
    {
        if let Some(resolved) = tagged.read(item) {
            return Some(resolved);
        }
        debug!(kind = ?tagged, "Item kind tag does not match its fields, falling back to shape");
    }

    let kind = structural_kind(item)?;
    let resolved = kind.read(item);
    if resolved.is_none() {
        debug!(kind = ?kind, "Item matched a shape but its fields could not be read");
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kind_of(item: Value) -> Option<ItemKind> {
        classify_item(&item).map(|i| i.kind())
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let order: Vec<_> = RULES.iter().map(|r| r.kind).collect();
        assert_eq!(
            order,
            vec![
                ItemKind::Experience,
                ItemKind::Education,
                ItemKind::Skills,
                ItemKind::Project,
                ItemKind::Certification,
                ItemKind::Custom,
            ]
        );
    }

    #[test]
    fn test_each_shape() {
        assert_eq!(
            kind_of(json!({ "company": "Acme", "position": "Engineer" })),
            Some(ItemKind::Experience)
        );
        assert_eq!(
            kind_of(json!({ "institution": "MIT", "degree": "BSc" })),
            Some(ItemKind::Education)
        );
        assert_eq!(
            kind_of(json!({ "category": "Languages", "skills": ["Rust"] })),
            Some(ItemKind::Skills)
        );
        assert_eq!(
            kind_of(json!({ "name": "X", "technologies": ["Go"] })),
            Some(ItemKind::Project)
        );
        assert_eq!(
            kind_of(json!({ "name": "X", "issuer": "Y" })),
            Some(ItemKind::Certification)
        );
        assert_eq!(
            kind_of(json!({ "title": "Volunteer", "description": ["Taught"] })),
            Some(ItemKind::Custom)
        );
    }

    #[test]
    fn test_project_beats_certification() {
        assert_eq!(
            kind_of(json!({ "name": "X", "issuer": "Y", "technologies": ["Go"] })),
            Some(ItemKind::Project)
        );
    }

    #[test]
    fn test_skills_require_array() {
        assert_eq!(kind_of(json!({ "category": "Languages", "skills": "Rust" })), None);
    }

    #[test]
    fn test_custom_rejects_foreign_keys() {
        assert_eq!(kind_of(json!({ "title": "Award", "issuer": "IEEE" })), None);
    }

    #[test]
    fn test_unrecognized_shapes_skipped() {
        assert_eq!(kind_of(json!({ "foo": "bar" })), None);
        assert_eq!(kind_of(json!({ "company": "Acme" })), None);
        assert_eq!(kind_of(json!("just a string")), None);
        assert_eq!(kind_of(json!(null)), None);
        assert_eq!(kind_of(json!([1, 2])), None);
    }

    #[test]
    fn test_shape_match_with_unreadable_fields_skipped() {
        assert_eq!(
            kind_of(json!({ "company": null, "position": "Engineer" })),
            None
        );
    }

    #[test]
    fn test_explicit_kind_wins_when_readable() {
        // Structurally a project, but tagged as a certification it can also be read as.
        assert_eq!(
            kind_of(json!({
                "kind": "certification",
                "name": "CKA",
                "issuer": "CNCF",
                "technologies": ["Kubernetes"]
            })),
            Some(ItemKind::Certification)
        );
    }

    #[test]
    fn test_unusable_kind_falls_back_to_shape() {
        assert_eq!(
            kind_of(json!({ "kind": "education", "name": "X", "issuer": "Y" })),
            Some(ItemKind::Certification)
        );
        assert_eq!(
            kind_of(json!({ "kind": "award", "company": "Acme", "position": "Eng" })),
            Some(ItemKind::Experience)
        );
    }
}
