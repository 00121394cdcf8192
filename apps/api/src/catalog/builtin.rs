//! The five presets shipped with the service, one per registered renderer.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::template::{
    ColorScheme, Compatibility, CustomizationPermissions, FontSizes, HeaderAlignment, Layout,
    Margins, Template, TemplateCategory, TemplateMetadata, TextColors, Typography,
};
use crate::render::registry::{
    CLASSIC_PROFESSIONAL, CREATIVE_PORTFOLIO, EXECUTIVE_ELITE, MODERN_MINIMAL, TECHNICAL_DEVELOPER,
};

fn released() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

fn colors(primary: &str, secondary: &str, accent: &str, text: [&str; 3]) -> ColorScheme {
    ColorScheme {
        primary: primary.to_string(),
        secondary: secondary.to_string(),
        accent: accent.to_string(),
        background: "#ffffff".to_string(),
        border: "#e5e7eb".to_string(),
        text: TextColors {
            primary: text[0].to_string(),
            secondary: text[1].to_string(),
            muted: text[2].to_string(),
        },
    }
}

fn typography(heading: &str, body: &str, name_px: f32, body_px: f32) -> Typography {
    Typography {
        heading_font: heading.to_string(),
        body_font: body.to_string(),
        font_size: FontSizes {
            name: name_px,
            heading: body_px + 4.0,
            subheading: body_px + 1.0,
            body: body_px,
            small: body_px - 1.5,
        },
        line_height: 1.45,
        heading_weight: 700,
    }
}

fn layout(margin: f32, section: f32, item: f32, align: HeaderAlignment) -> Layout {
    Layout {
        margins: Margins {
            top: margin,
            right: margin,
            bottom: margin,
            left: margin,
        },
        section_spacing: section,
        item_spacing: item,
        header_alignment: align,
        show_section_dividers: true,
    }
}

fn metadata(tags: &[&str], rating: f32, popularity: u32) -> TemplateMetadata {
    TemplateMetadata {
        tags: tags.iter().map(|t| t.to_string()).collect(),
        rating,
        popularity,
        created_at: released(),
        updated_at: released(),
    }
}

pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template {
            id: CLASSIC_PROFESSIONAL.to_string(),
            name: "Classic Professional".to_string(),
            category: TemplateCategory::Professional,
            description: "Single-column layout that reads cleanly in tracking systems.".to_string(),
            version: "1.2.0".to_string(),
            color_scheme: colors(
                "#1f2937",
                "#f3f4f6",
                "#2563eb",
                ["#111827", "#4b5563", "#9ca3af"],
            ),
            typography: typography(
                "Georgia, 'Times New Roman', serif",
                "Georgia, 'Times New Roman', serif",
                28.0,
                11.0,
            ),
            layout: layout(40.0, 18.0, 10.0, HeaderAlignment::Center),
            customization: CustomizationPermissions::default(),
            compatibility: Compatibility {
                ats_compatible: true,
                mobile_optimized: true,
                print_optimized: true,
            },
            metadata: metadata(&["ats", "traditional", "serif"], 4.8, 9800),
        },
        Template {
            id: MODERN_MINIMAL.to_string(),
            name: "Modern Minimal".to_string(),
            category: TemplateCategory::Modern,
            description: "Clean sans-serif layout with accents and skill chips.".to_string(),
            version: "1.1.0".to_string(),
            color_scheme: colors(
                "#0f766e",
                "#ccfbf1",
                "#14b8a6",
                ["#0f172a", "#475569", "#94a3b8"],
            ),
            typography: typography(
                "Inter, 'Helvetica Neue', Arial, sans-serif",
                "Inter, 'Helvetica Neue', Arial, sans-serif",
                30.0,
                10.5,
            ),
            layout: layout(36.0, 16.0, 10.0, HeaderAlignment::Left),
            customization: CustomizationPermissions::default(),
            compatibility: Compatibility {
                ats_compatible: true,
                mobile_optimized: true,
                print_optimized: true,
            },
            metadata: metadata(&["minimal", "sans-serif", "startup"], 4.7, 8700),
        },
        Template {
            id: EXECUTIVE_ELITE.to_string(),
            name: "Executive Elite".to_string(),
            category: TemplateCategory::Executive,
            description: "Bold header band and company-first entries for leadership.".to_string(),
            version: "1.0.0".to_string(),
            color_scheme: colors(
                "#1e3a5f",
                "#dbe4ee",
                "#c9a227",
                ["#1a202c", "#4a5568", "#a0aec0"],
            ),
            typography: typography(
                "'Playfair Display', Georgia, serif",
                "'Source Sans Pro', Arial, sans-serif",
                32.0,
                11.0,
            ),
            layout: layout(44.0, 20.0, 12.0, HeaderAlignment::Left),
            customization: CustomizationPermissions {
                can_change_colors: true,
                can_change_fonts: false,
                can_change_layout: true,
            },
            compatibility: Compatibility {
                ats_compatible: false,
                mobile_optimized: false,
                print_optimized: true,
            },
            metadata: metadata(&["leadership", "senior", "bold"], 4.6, 5200),
        },
        Template {
            id: TECHNICAL_DEVELOPER.to_string(),
            name: "Technical Developer".to_string(),
            category: TemplateCategory::Technical,
            description: "Dense, code-flavoured layout that foregrounds stacks.".to_string(),
            version: "1.3.0".to_string(),
            color_scheme: colors(
                "#111827",
                "#f9fafb",
                "#7c3aed",
                ["#111827", "#374151", "#6b7280"],
            ),
            typography: typography(
                "'JetBrains Mono', 'Fira Code', monospace",
                "'IBM Plex Sans', Arial, sans-serif",
                24.0,
                10.0,
            ),
            layout: layout(32.0, 14.0, 8.0, HeaderAlignment::Left),
            customization: CustomizationPermissions::default(),
            compatibility: Compatibility {
                ats_compatible: true,
                mobile_optimized: false,
                print_optimized: true,
            },
            metadata: metadata(&["developer", "engineering", "monospace"], 4.9, 11200),
        },
        Template {
            id: CREATIVE_PORTFOLIO.to_string(),
            name: "Creative Portfolio".to_string(),
            category: TemplateCategory::Creative,
            description: "Gradient banner and timeline entries for design roles.".to_string(),
            version: "1.0.2".to_string(),
            color_scheme: colors(
                "#7e22ce",
                "#f5f3ff",
                "#ec4899",
                ["#1f1b2e", "#5b5675", "#a39fbf"],
            ),
            typography: typography(
                "Poppins, 'Segoe UI', sans-serif",
                "'Nunito Sans', 'Segoe UI', sans-serif",
                34.0,
                10.5,
            ),
            layout: layout(36.0, 22.0, 12.0, HeaderAlignment::Center),
            customization: CustomizationPermissions {
                can_change_colors: true,
                can_change_fonts: true,
                can_change_layout: false,
            },
            compatibility: Compatibility {
                ats_compatible: false,
                mobile_optimized: true,
                print_optimized: false,
            },
            metadata: metadata(&["design", "colorful", "portfolio"], 4.5, 6100),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::registry::registered_ids;

    #[test]
    fn test_one_builtin_per_renderer() {
        let ids: Vec<String> = builtin_templates().into_iter().map(|t| t.id).collect();
        let registered: Vec<&str> = registered_ids().collect();
        assert_eq!(ids, registered);
    }

    #[test]
    fn test_builtins_round_trip_as_catalog_json() {
        for t in builtin_templates() {
            let json = serde_json::to_value(&t).unwrap();
            assert!(json.get("colorScheme").is_some());
            let back: Template = serde_json::from_value(json).unwrap();
            assert_eq!(back, t);
        }
    }
}
