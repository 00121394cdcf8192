//! Shared section dispatcher.
//!
//! Every template goes through [`render_document`]; only the per-entry markup
//! differs, supplied by an [`EntryFormatter`]. The dispatcher owns:
//! theme resolution, placeholder states, section visibility and order, and
//! per-item classification (the section's declared type picks the body layout,
//! the item's own shape picks its entry layout).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::resume::{PersonalInfo, Resume, SectionType};
use crate::models::template::{Template, TemplateCustomizations};
use crate::render::html::{Markup, Style};
use crate::sections::{
    classify_item, CertificationItem, CustomSectionItem, EducationItem, ExperienceItem,
    ProjectItem, SectionItem, SkillsItem,
};
use crate::theme::{apply_customizations, AppliedTheme};

// ────────────────────────────────────────────────────────────────────────────
// Inputs and outputs
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    pub scale: f32,
    pub print_mode: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            print_mode: false,
        }
    }
}

impl RenderOptions {
    /// Print output is always unscaled; unusable scale values degrade to 1.0.
    pub fn effective_scale(&self) -> f32 {
        if self.print_mode || !self.scale.is_finite() || self.scale <= 0.0 {
            1.0
        } else {
            self.scale
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    NoResume,
    TemplateNotFound,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderedDocument {
    /// Id of the renderer that actually produced the output.
    pub renderer_id: String,
    pub html: String,
    /// Titles of the rendered sections, in render order.
    pub section_titles: Vec<String>,
    /// Items dropped because they matched no known shape.
    pub skipped_items: usize,
    /// Set when the output is a placeholder instead of a résumé.
    pub placeholder: Option<Placeholder>,
}

// ────────────────────────────────────────────────────────────────────────────
// Strategy
// ────────────────────────────────────────────────────────────────────────────

/// Per-template markup for each part of the document.
pub trait EntryFormatter: Sync {
    /// Extra styling for the page container, on top of the common theme styles.
    fn page_style(&self, theme: &AppliedTheme) -> Style {
        let _ = theme;
        Style::new()
    }

    fn header(&self, out: &mut Markup, info: &PersonalInfo, theme: &AppliedTheme);

    fn section_heading(&self, out: &mut Markup, title: &str, theme: &AppliedTheme);

    /// Class of the container holding a section's entries.
    fn section_body_class(&self, section_type: SectionType) -> &'static str {
        match section_type {
            SectionType::Skills => "section-body skills-grid",
            SectionType::Certifications => "section-body compact-list",
            _ => "section-body entry-list",
        }
    }

    fn experience(&self, out: &mut Markup, item: &ExperienceItem, theme: &AppliedTheme);
    fn education(&self, out: &mut Markup, item: &EducationItem, theme: &AppliedTheme);
    fn skills(&self, out: &mut Markup, item: &SkillsItem, theme: &AppliedTheme);
    fn project(&self, out: &mut Markup, item: &ProjectItem, theme: &AppliedTheme);
    fn certification(&self, out: &mut Markup, item: &CertificationItem, theme: &AppliedTheme);
    fn custom(&self, out: &mut Markup, item: &CustomSectionItem, theme: &AppliedTheme);
}

// ────────────────────────────────────────────────────────────────────────────
// Dispatcher
// ────────────────────────────────────────────────────────────────────────────

pub fn render_document(
    renderer_id: &str,
    formatter: &dyn EntryFormatter,
    resume: Option<&Resume>,
    template: Option<&Template>,
    customizations: Option<&TemplateCustomizations>,
    options: RenderOptions,
) -> RenderedDocument {
    let Some(resume) = resume else {
        return placeholder(renderer_id, Placeholder::NoResume);
    };
    let Some(template) = template else {
        return placeholder(renderer_id, Placeholder::TemplateNotFound);
    };

    let theme = apply_customizations(template, customizations);
    let mut out = Markup::new();
    let mut section_titles = Vec::new();
    let mut skipped_items = 0usize;

    let page_class = if options.print_mode {
        format!("resume-page template-{renderer_id} print")
    } else {
        format!("resume-page template-{renderer_id}")
    };
    out.open_styled("div", &page_class, &page_style(formatter, &theme, &options));

    formatter.header(&mut out, &resume.personal_info, &theme);

    for section in resume.visible_sections() {
        let section_style = Style::new().px("margin-top", theme.layout.section_spacing);
        out.open_styled(
            "section",
            &format!("resume-section section-{}", section_slug(section.section_type)),
            &section_style,
        );

        if !section.title.trim().is_empty() {
            formatter.section_heading(&mut out, &section.title, &theme);
        }

        out.open("div", formatter.section_body_class(section.section_type));
        for raw in &section.items {
            match classify_item(raw) {
                Some(item) => render_item(formatter, &mut out, &item, &theme),
                None => {
                    skipped_items += 1;
                    debug!(section = %section.id, "Skipping unclassifiable section item");
                }
            }
        }
        out.close(); // body
        out.close(); // section

        section_titles.push(section.title.clone());
    }

    RenderedDocument {
        renderer_id: renderer_id.to_string(),
        html: out.finish(),
        section_titles,
        skipped_items,
        placeholder: None,
    }
}

fn render_item(
    formatter: &dyn EntryFormatter,
    out: &mut Markup,
    item: &SectionItem,
    theme: &AppliedTheme,
) {
    match item {
        SectionItem::Experience(e) => formatter.experience(out, e, theme),
        SectionItem::Education(e) => formatter.education(out, e, theme),
        SectionItem::Skills(s) => formatter.skills(out, s, theme),
        SectionItem::Project(p) => formatter.project(out, p, theme),
        SectionItem::Certification(c) => formatter.certification(out, c, theme),
        SectionItem::Custom(c) => formatter.custom(out, c, theme),
    }
}

fn section_slug(section_type: SectionType) -> &'static str {
    match section_type {
        SectionType::Experience => "experience",
        SectionType::Education => "education",
        SectionType::Skills => "skills",
        SectionType::Projects => "projects",
        SectionType::Certifications => "certifications",
        SectionType::Custom => "custom",
    }
}

fn page_style(
    formatter: &dyn EntryFormatter,
    theme: &AppliedTheme,
    options: &RenderOptions,
) -> Style {
    let colors = &theme.color_scheme;
    let typo = &theme.typography;
    let margins = &theme.layout.margins;

    let mut style = Style::new()
        .prop("font-family", &typo.body_font)
        .px("font-size", typo.font_size.body)
        .num("line-height", typo.line_height)
        .prop("color", &colors.text.primary)
        .prop("background", &colors.background)
        .px("padding-top", margins.top)
        .px("padding-right", margins.right)
        .px("padding-bottom", margins.bottom)
        .px("padding-left", margins.left);

    let scale = options.effective_scale();
    if scale != 1.0 {
        style = style
            .prop("transform", &format!("scale({scale})"))
            .prop("transform-origin", "top left");
    }

    style.merge(formatter.page_style(theme))
}

fn placeholder(renderer_id: &str, kind: Placeholder) -> RenderedDocument {
    let (title, hint) = match kind {
        Placeholder::NoResume => ("No resume data", "Add your details to see a preview."),
        Placeholder::TemplateNotFound => (
            "Template not found",
            "Choose a template from the gallery to continue.",
        ),
    };

    let mut out = Markup::new();
    out.open("div", "resume-placeholder")
        .element("h2", "placeholder-title", &Style::new(), title)
        .element("p", "placeholder-hint", &Style::new(), hint);

    RenderedDocument {
        renderer_id: renderer_id.to_string(),
        html: out.finish(),
        section_titles: vec![],
        skipped_items: 0,
        placeholder: Some(kind),
    }
}
