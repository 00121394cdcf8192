#![allow(dead_code)]

//! Template catalog entries and the partial overrides a résumé may layer on top.
//!
//! Every override type mirrors its full counterpart with all fields optional and
//! skipped when unset, so that serializing an override yields exactly the keys
//! the user touched. `theme::apply_customizations` relies on that.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Catalog entry
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    Professional,
    Modern,
    Executive,
    Technical,
    Creative,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub category: TemplateCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_version")]
    pub version: String,
    pub color_scheme: ColorScheme,
    pub typography: Typography,
    pub layout: Layout,
    #[serde(default)]
    pub customization: CustomizationPermissions,
    #[serde(default)]
    pub compatibility: Compatibility,
    #[serde(default)]
    pub metadata: TemplateMetadata,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationPermissions {
    pub can_change_colors: bool,
    pub can_change_fonts: bool,
    pub can_change_layout: bool,
}

impl Default for CustomizationPermissions {
    fn default() -> Self {
        Self {
            can_change_colors: true,
            can_change_fonts: true,
            can_change_layout: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Compatibility {
    pub ats_compatible: bool,
    pub mobile_optimized: bool,
    pub print_optimized: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateMetadata {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub popularity: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for TemplateMetadata {
    fn default() -> Self {
        Self {
            tags: vec![],
            rating: 0.0,
            popularity: 0,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            updated_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Theme value objects
// ────────────────────────────────────────────────────────────────────────────

/// Colors are CSS color strings and are never validated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub border: String,
    pub text: TextColors,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
    pub muted: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub heading_font: String,
    pub body_font: String,
    pub font_size: FontSizes,
    pub line_height: f32,
    pub heading_weight: u16,
}

/// Sizes in px.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FontSizes {
    pub name: f32,
    pub heading: f32,
    pub subheading: f32,
    pub body: f32,
    pub small: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderAlignment {
    Left,
    Center,
    Right,
}

impl HeaderAlignment {
    pub fn as_css(&self) -> &'static str {
        match self {
            HeaderAlignment::Left => "left",
            HeaderAlignment::Center => "center",
            HeaderAlignment::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub margins: Margins,
    /// Vertical gap between sections, px.
    pub section_spacing: f32,
    /// Vertical gap between entries in a section, px.
    pub item_spacing: f32,
    pub header_alignment: HeaderAlignment,
    pub show_section_dividers: bool,
}

/// Page margins in px.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

// ────────────────────────────────────────────────────────────────────────────
// Partial overrides
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateCustomizations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<ColorSchemeOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<TypographyOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutOverrides>,
}

impl TemplateCustomizations {
    /// Drops every override group the template does not allow the user to change.
    pub fn permitted_by(&self, template: &Template) -> TemplateCustomizations {
        let perms = &template.customization;
        TemplateCustomizations {
            color_scheme: self
                .color_scheme
                .clone()
                .filter(|_| perms.can_change_colors),
            typography: self.typography.clone().filter(|_| perms.can_change_fonts),
            layout: self.layout.clone().filter(|_| perms.can_change_layout),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.color_scheme.is_none() && self.typography.is_none() && self.layout.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColorSchemeOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextColorsOverrides>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextColorsOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TypographyOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_font: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_font: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSizesOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_weight: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FontSizesOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheading: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<f32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margins: Option<MarginsOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_spacing: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_alignment: Option<HeaderAlignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_section_dividers: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarginsOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_templates;

    fn locked_template() -> Template {
        let mut t = builtin_templates().remove(0);
        t.customization = CustomizationPermissions {
            can_change_colors: false,
            can_change_fonts: true,
            can_change_layout: false,
        };
        t
    }

    #[test]
    fn test_override_serializes_only_set_keys() {
        let o = ColorSchemeOverrides {
            text: Some(TextColorsOverrides {
                primary: Some("#111".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let v = serde_json::to_value(&o).unwrap();
        assert_eq!(v, serde_json::json!({ "text": { "primary": "#111" } }));
    }

    #[test]
    fn test_permitted_by_drops_locked_groups() {
        let c = TemplateCustomizations {
            color_scheme: Some(ColorSchemeOverrides {
                primary: Some("red".to_string()),
                ..Default::default()
            }),
            typography: Some(TypographyOverrides {
                body_font: Some("Georgia".to_string()),
                ..Default::default()
            }),
            layout: Some(LayoutOverrides {
                item_spacing: Some(4.0),
                ..Default::default()
            }),
        };
        let filtered = c.permitted_by(&locked_template());
        assert!(filtered.color_scheme.is_none());
        assert!(filtered.layout.is_none());
        assert_eq!(
            filtered.typography.unwrap().body_font.as_deref(),
            Some("Georgia")
        );
    }

    #[test]
    fn test_empty_customizations() {
        assert!(TemplateCustomizations::default().is_empty());
    }
}
