use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::template::{ColorScheme, Layout, Template, TemplateCustomizations, Typography};
use crate::theme::merge::deep_merge;

/// Fully resolved styling for one render pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppliedTheme {
    pub color_scheme: ColorScheme,
    pub typography: Typography,
    pub layout: Layout,
}

/// Overlays `customizations` onto the template defaults, leaf by leaf.
///
/// Keys the customizations leave unset keep the template default. Values are
/// not validated. The template is only read.
pub fn apply_customizations(
    template: &Template,
    customizations: Option<&TemplateCustomizations>,
) -> AppliedTheme {
    let Some(c) = customizations else {
        return AppliedTheme {
            color_scheme: template.color_scheme.clone(),
            typography: template.typography.clone(),
            layout: template.layout.clone(),
        };
    };

    AppliedTheme {
        color_scheme: overlay(&template.color_scheme, c.color_scheme.as_ref()),
        typography: overlay(&template.typography, c.typography.as_ref()),
        layout: overlay(&template.layout, c.layout.as_ref()),
    }
}

/// Merges one override group onto its default. Falls back to the default if the
/// merged record cannot be read back, which keeps the merge total.
fn overlay<T, O>(defaults: &T, overrides: Option<&O>) -> T
where
    T: Serialize + DeserializeOwned + Clone,
    O: Serialize,
{
    let Some(overrides) = overrides else {
        return defaults.clone();
    };

    let merged = match (serde_json::to_value(defaults), serde_json::to_value(overrides)) {
        (Ok(base), Ok(over)) => deep_merge(&base, &over),
        (Err(e), _) | (_, Err(e)) => {
            warn!("Theme override could not be serialized, using defaults: {e}");
            return defaults.clone();
        }
    };

    serde_json::from_value(merged).unwrap_or_else(|e| {
        warn!("Merged theme could not be read back, using defaults: {e}");
        defaults.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_templates;
    use crate::models::template::{
        ColorSchemeOverrides, FontSizesOverrides, HeaderAlignment, LayoutOverrides,
        MarginsOverrides, TextColorsOverrides, TypographyOverrides,
    };

    fn template() -> Template {
        builtin_templates().remove(0)
    }

    #[test]
    fn test_no_customizations_equals_defaults() {
        let t = template();
        let theme = apply_customizations(&t, None);
        assert_eq!(theme.color_scheme, t.color_scheme);
        assert_eq!(theme.typography, t.typography);
        assert_eq!(theme.layout, t.layout);
        assert_eq!(
            apply_customizations(&t, Some(&TemplateCustomizations::default())),
            theme
        );
    }

    #[test]
    fn test_nested_text_color_merges_at_leaf() {
        let t = template();
        let c = TemplateCustomizations {
            color_scheme: Some(ColorSchemeOverrides {
                text: Some(TextColorsOverrides {
                    primary: Some("#123456".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        let theme = apply_customizations(&t, Some(&c));
        assert_eq!(theme.color_scheme.text.primary, "#123456");
        assert_eq!(theme.color_scheme.text.secondary, t.color_scheme.text.secondary);
        assert_eq!(theme.color_scheme.text.muted, t.color_scheme.text.muted);
        assert_eq!(theme.color_scheme.primary, t.color_scheme.primary);
    }

    #[test]
    fn test_every_group_overrides_independently() {
        let t = template();
        let c = TemplateCustomizations {
            color_scheme: Some(ColorSchemeOverrides {
                accent: Some("teal".to_string()),
                ..Default::default()
            }),
            typography: Some(TypographyOverrides {
                body_font: Some("Georgia, serif".to_string()),
                font_size: Some(FontSizesOverrides {
                    name: Some(40.0),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            layout: Some(LayoutOverrides {
                margins: Some(MarginsOverrides {
                    left: Some(10.0),
                    ..Default::default()
                }),
                header_alignment: Some(HeaderAlignment::Right),
                ..Default::default()
            }),
        };
        let theme = apply_customizations(&t, Some(&c));

        assert_eq!(theme.color_scheme.accent, "teal");
        assert_eq!(theme.typography.body_font, "Georgia, serif");
        assert_eq!(theme.typography.heading_font, t.typography.heading_font);
        assert_eq!(theme.typography.font_size.name, 40.0);
        assert_eq!(theme.typography.font_size.body, t.typography.font_size.body);
        assert_eq!(theme.layout.margins.left, 10.0);
        assert_eq!(theme.layout.margins.top, t.layout.margins.top);
        assert_eq!(theme.layout.header_alignment, HeaderAlignment::Right);
        assert_eq!(theme.layout.section_spacing, t.layout.section_spacing);
    }

    #[test]
    fn test_malformed_color_passes_through() {
        let t = template();
        let c = TemplateCustomizations {
            color_scheme: Some(ColorSchemeOverrides {
                primary: Some("#zzz-not-a-color".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let theme = apply_customizations(&t, Some(&c));
        assert_eq!(theme.color_scheme.primary, "#zzz-not-a-color");
    }

    #[test]
    fn test_idempotent_and_template_unchanged() {
        let t = template();
        let before = t.clone();
        let c = TemplateCustomizations {
            layout: Some(LayoutOverrides {
                item_spacing: Some(2.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        let first = apply_customizations(&t, Some(&c));
        let second = apply_customizations(&t, Some(&c));
        assert_eq!(first, second);
        assert_eq!(t, before);
    }
}
