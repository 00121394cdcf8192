// Résumé rendering: one shared section dispatcher, five template strategies,
// and the id → renderer registry. Everything here is pure and synchronous.

pub mod document;
pub mod format;
pub mod html;
pub mod registry;
pub mod templates;

pub use document::{Placeholder, RenderOptions, RenderedDocument};
pub use registry::{get_template_renderer, CLASSIC_PROFESSIONAL};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_templates;
    use crate::models::resume::Resume;
    use crate::models::template::{ColorSchemeOverrides, Template, TemplateCustomizations};
    use crate::render::registry::{registered_ids, MODERN_MINIMAL};
    use serde_json::{json, Value};

    fn template(id: &str) -> Template {
        builtin_templates()
            .into_iter()
            .find(|t| t.id == id)
            .unwrap()
    }

    fn resume_with(sections: Value) -> Resume {
        serde_json::from_value(json!({
            "title": "My Resume",
            "templateId": CLASSIC_PROFESSIONAL,
            "personalInfo": { "fullName": "Jane Doe", "email": "jane@x.com" },
            "sections": sections
        }))
        .unwrap()
    }

    fn jane() -> Resume {
        resume_with(json!([{
            "id": "exp",
            "type": "experience",
            "title": "Experience",
            "order": 0,
            "visible": true,
            "items": [{
                "company": "Acme",
                "position": "Engineer",
                "startDate": "2022-01",
                "endDate": null
            }]
        }]))
    }

    fn render(id: &str, resume: &Resume) -> RenderedDocument {
        get_template_renderer(id).render(
            Some(resume),
            Some(&template(CLASSIC_PROFESSIONAL)),
            None,
            RenderOptions::default(),
        )
    }

    #[test]
    fn test_classic_renders_header_and_open_ended_experience() {
        let doc = render(CLASSIC_PROFESSIONAL, &jane());
        for expected in ["Jane Doe", "jane@x.com", "Acme", "Engineer", "Present"] {
            assert!(doc.html.contains(expected), "missing {expected}: {}", doc.html);
        }
        assert_eq!(doc.section_titles, vec!["Experience"]);
        assert_eq!(doc.skipped_items, 0);
        assert!(doc.placeholder.is_none());
    }

    #[test]
    fn test_unknown_template_id_matches_classic_output() {
        let resume = jane();
        assert_eq!(
            render("does-not-exist", &resume),
            render(CLASSIC_PROFESSIONAL, &resume)
        );
    }

    #[test]
    fn test_certification_vs_project_rendering() {
        let resume = resume_with(json!([{
            "id": "misc",
            "type": "custom",
            "title": "Extras",
            "order": 0,
            "visible": true,
            "items": [
                { "name": "X", "issuer": "Yardley Institute" },
                { "name": "Z", "issuer": "Zenith Labs", "technologies": ["Go"] }
            ]
        }]));
        let classic = render(CLASSIC_PROFESSIONAL, &resume);
        let issuer =
            r#"<div class="entry-issuer" style="font-style: italic;">Yardley Institute</div>"#;
        assert!(classic.html.contains(issuer));
        assert!(classic.html.contains("Technologies: Go"));

        for id in registered_ids() {
            let doc = render(id, &resume);
            assert_eq!(doc.skipped_items, 0, "renderer {id}");
            assert_eq!(doc.html.matches("entry certification").count(), 1, "renderer {id}");
            assert_eq!(doc.html.matches("entry project").count(), 1, "renderer {id}");

            // Markup from the certification entry up to the project entry.
            let cert = &doc.html[doc.html.find("entry certification").unwrap()..];
            let cert = &cert[..cert.find("entry project").unwrap()];
            assert!(cert.contains("Yardley Institute"), "renderer {id}: {cert}");
            assert!(!cert.contains("Go"), "renderer {id}");

            let project = &doc.html[doc.html.find("entry project").unwrap()..];
            assert!(project.contains("Go"), "renderer {id}");
            assert!(!project.contains("Zenith Labs"), "renderer {id}");
        }
    }

    #[test]
    fn test_section_order_and_visibility() {
        let resume = resume_with(json!([
            { "id": "a", "title": "Second", "order": 1, "visible": true, "items": [] },
            { "id": "b", "title": "Third", "order": 2, "visible": true, "items": [] },
            { "id": "c", "title": "Hidden", "order": 0, "visible": false, "items": [] },
            { "id": "d", "title": "First", "order": 0, "visible": true, "items": [] }
        ]));
        for id in registered_ids() {
            let doc = render(id, &resume);
            assert_eq!(doc.section_titles, vec!["First", "Second", "Third"], "renderer {id}");
            assert!(!doc.html.contains("Hidden"), "renderer {id}");
            let first = doc.html.find("first").or_else(|| doc.html.find("First")).unwrap();
            let third = doc.html.find("third").or_else(|| doc.html.find("Third")).unwrap();
            assert!(first < third, "renderer {id}");
        }
    }

    #[test]
    fn test_unclassifiable_items_skipped_in_every_renderer() {
        let resume = resume_with(json!([{
            "id": "exp",
            "type": "experience",
            "title": "Experience",
            "order": 0,
            "visible": true,
            "items": [
                { "foo": "zzqx-marker" },
                { "company": "Acme", "position": "Engineer" },
                "not an object"
            ]
        }]));
        for id in registered_ids() {
            let doc = render(id, &resume);
            assert_eq!(doc.skipped_items, 2, "renderer {id}");
            assert!(!doc.html.contains("zzqx"), "renderer {id}");
            assert_eq!(doc.html.matches("class=\"entry ").count(), 1, "renderer {id}");
        }
    }

    #[test]
    fn test_item_shape_wins_over_section_type() {
        let resume = resume_with(json!([{
            "id": "edu",
            "type": "education",
            "title": "Education",
            "order": 0,
            "visible": true,
            "items": [{ "category": "Languages", "skills": ["Rust", "Go"] }]
        }]));
        let doc = render(CLASSIC_PROFESSIONAL, &resume);
        assert!(doc.html.contains("entry skills"));
        assert!(doc.html.contains("Rust, Go"));
    }

    #[test]
    fn test_missing_optional_fields_render_without_them() {
        let resume = resume_with(json!([{
            "id": "edu",
            "type": "education",
            "title": "Education",
            "order": 0,
            "visible": true,
            "items": [{ "institution": "MIT", "degree": "BSc" }]
        }]));
        for id in registered_ids() {
            let doc = render(id, &resume);
            assert!(doc.html.contains("MIT"), "renderer {id}");
            assert!(!doc.html.to_lowercase().contains("gpa"), "renderer {id}");
        }
    }

    #[test]
    fn test_placeholders() {
        let renderer = get_template_renderer(MODERN_MINIMAL);
        let no_resume = renderer.render(
            None,
            Some(&template(CLASSIC_PROFESSIONAL)),
            None,
            RenderOptions::default(),
        );
        assert_eq!(no_resume.placeholder, Some(Placeholder::NoResume));
        assert!(no_resume.html.contains("No resume data"));

        let no_template = renderer.render(Some(&jane()), None, None, RenderOptions::default());
        assert_eq!(no_template.placeholder, Some(Placeholder::TemplateNotFound));
        assert!(no_template.html.contains("Template not found"));
        assert!(no_template.section_titles.is_empty());
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut resume = jane();
        resume.personal_info.full_name = "<script>alert(1)</script>".to_string();
        let doc = render(CLASSIC_PROFESSIONAL, &resume);
        assert!(!doc.html.contains("<script>"));
        assert!(doc.html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_script_urls_are_not_linked() {
        let resume = resume_with(json!([{
            "id": "proj",
            "type": "projects",
            "title": "Projects",
            "order": 0,
            "visible": true,
            "items": [
                {
                    "name": "Sneaky",
                    "technologies": ["Rust"],
                    "url": "javascript:alert(document.cookie)"
                },
                { "name": "Real", "technologies": ["Go"], "url": "https://real.dev" }
            ]
        }]));
        for id in registered_ids() {
            let doc = render(id, &resume);
            assert!(!doc.html.contains(r#"href="javascript"#), "renderer {id}");
            assert!(doc.html.contains("javascript:alert(document.cookie)"), "renderer {id}");
            assert!(doc.html.contains(r#"<a href="https://real.dev""#), "renderer {id}");
        }
    }

    #[test]
    fn test_customizations_reach_the_markup() {
        let customizations = TemplateCustomizations {
            color_scheme: Some(ColorSchemeOverrides {
                primary: Some("#abcdef".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let doc = get_template_renderer(CLASSIC_PROFESSIONAL).render(
            Some(&jane()),
            Some(&template(CLASSIC_PROFESSIONAL)),
            Some(&customizations),
            RenderOptions::default(),
        );
        assert!(doc.html.contains("#abcdef"));
    }

    #[test]
    fn test_scale_and_print_mode() {
        let renderer = get_template_renderer(CLASSIC_PROFESSIONAL);
        let t = template(CLASSIC_PROFESSIONAL);
        let resume = jane();

        let scaled = renderer.render(
            Some(&resume),
            Some(&t),
            None,
            RenderOptions { scale: 0.5, print_mode: false },
        );
        assert!(scaled.html.contains("transform: scale(0.5)"));

        let printed = renderer.render(
            Some(&resume),
            Some(&t),
            None,
            RenderOptions { scale: 0.5, print_mode: true },
        );
        assert!(!printed.html.contains("transform: scale"));
        assert!(printed.html.contains("resume-page template-classic-professional print"));

        let bogus = renderer.render(
            Some(&resume),
            Some(&t),
            None,
            RenderOptions { scale: f32::NAN, print_mode: false },
        );
        assert!(!bogus.html.contains("transform: scale"));
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let resume = jane();
        for id in registered_ids() {
            assert_eq!(render(id, &resume), render(id, &resume));
        }
    }
}
