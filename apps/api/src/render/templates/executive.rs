//! Executive: full-width header band in the primary color, small-caps headings,
//! company-first entries.

use crate::models::resume::PersonalInfo;
use crate::render::document::EntryFormatter;
use crate::render::format::{date_range, format_date};
use crate::render::html::{Markup, Style};
use crate::render::templates::{
    bullet_list, contact_and_summary, degree_label, entry_title_row, heading_font, join_present,
    muted,
};
use crate::sections::{
    CertificationItem, CustomSectionItem, EducationItem, ExperienceItem, ProjectItem, SkillsItem,
};
use crate::theme::AppliedTheme;

pub struct ExecutiveFormatter;

impl ExecutiveFormatter {
    fn org(theme: &AppliedTheme) -> Style {
        Style::new()
            .prop("font-weight", "700")
            .prop("text-transform", "uppercase")
            .prop("letter-spacing", "0.04em")
            .px("font-size", theme.typography.font_size.subheading)
            .prop("color", &theme.color_scheme.primary)
    }

    fn role(theme: &AppliedTheme) -> Style {
        Style::new()
            .prop("font-style", "italic")
            .prop("color", &theme.color_scheme.text.primary)
    }

    fn entry(theme: &AppliedTheme) -> Style {
        Style::new()
            .px("margin-bottom", theme.layout.item_spacing)
            .px("padding-bottom", theme.layout.item_spacing / 2.0)
            .prop("border-bottom", &format!("1px dotted {}", theme.color_scheme.border))
    }
}

impl EntryFormatter for ExecutiveFormatter {
    fn page_style(&self, theme: &AppliedTheme) -> Style {
        // The header band bleeds to the page edge, so the top padding moves into it.
        Style::new()
            .prop("padding-top", "0")
            .prop("border-top", &format!("6px solid {}", theme.color_scheme.accent))
    }

    fn header(&self, out: &mut Markup, info: &PersonalInfo, theme: &AppliedTheme) {
        let band = Style::new()
            .prop("background", &theme.color_scheme.primary)
            .prop("color", &theme.color_scheme.background)
            .prop("text-align", theme.layout.header_alignment.as_css())
            .px("padding", theme.layout.margins.top.max(16.0));
        out.open_styled("header", "resume-header band", &band);

        let name = heading_font(theme)
            .px("font-size", theme.typography.font_size.name)
            .prop("text-transform", "uppercase")
            .prop("letter-spacing", "0.12em")
            .prop("margin", "0");
        out.element("h1", "name", &name, &info.full_name);

        let contact = Style::new()
            .prop("color", &theme.color_scheme.secondary)
            .px("font-size", theme.typography.font_size.small);
        contact_and_summary(out, info, "   ", &contact, theme);
        out.close();
    }

    fn section_heading(&self, out: &mut Markup, title: &str, theme: &AppliedTheme) {
        let style = heading_font(theme)
            .px("font-size", theme.typography.font_size.heading)
            .prop("font-variant", "small-caps")
            .prop("letter-spacing", "0.08em")
            .prop("color", &theme.color_scheme.primary)
            .prop("border-bottom", &format!("2px solid {}", theme.color_scheme.accent))
            .prop("padding-bottom", "2px");
        out.element("h2", "section-title", &style, title);
    }

    fn experience(&self, out: &mut Markup, item: &ExperienceItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry experience", &Self::entry(theme));
        let dates = date_range(item.start_date.as_deref(), item.end_date.as_deref(), item.current);
        entry_title_row(out, &item.company, &Self::org(theme), dates.as_deref(), &muted(theme));
        let role = join_present(&[Some(item.position.as_str()), item.location.as_deref()], " — ");
        out.element("div", "entry-role", &Self::role(theme), &role);
        bullet_list(out, &item.description, &Style::new().prop("margin", "6px 0"));
        if !item.skills.is_empty() {
            out.element(
                "p",
                "entry-skills",
                &muted(theme),
                &format!("Core competencies: {}", item.skills.join(" · ")),
            );
        }
        out.close();
    }

    fn education(&self, out: &mut Markup, item: &EducationItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry education", &Self::entry(theme));
        let dates = date_range(item.start_date.as_deref(), item.end_date.as_deref(), false);
        entry_title_row(out, &item.institution, &Self::org(theme), dates.as_deref(), &muted(theme));
        let degree = degree_label(&item.degree, item.field.as_deref());
        let gpa = item.gpa.as_ref().map(|g| format!("GPA {g}"));
        let line = join_present(
            &[Some(degree.as_str()), item.location.as_deref(), gpa.as_deref()],
            " — ",
        );
        out.element("div", "entry-role", &Self::role(theme), &line);
        out.close();
    }

    fn skills(&self, out: &mut Markup, item: &SkillsItem, theme: &AppliedTheme) {
        let row = Style::new()
            .prop("display", "grid")
            .prop("grid-template-columns", "30% 70%")
            .prop("margin", "2px 0");
        out.open_styled("div", "entry skills", &row);
        out.element("span", "skill-category", &Self::org(theme), &item.category);
        out.element("span", "skill-list", &Style::new(), &item.skills.join(" · "));
        out.close();
    }

    fn project(&self, out: &mut Markup, item: &ProjectItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry project", &Self::entry(theme));
        let dates = date_range(item.start_date.as_deref(), item.end_date.as_deref(), false);
        entry_title_row(out, &item.name, &Self::org(theme), dates.as_deref(), &muted(theme));
        if let Some(description) = &item.description {
            out.element("p", "entry-description", &Self::role(theme), description);
        }
        if !item.technologies.is_empty() {
            out.element("p", "entry-technologies", &muted(theme), &item.technologies.join(" · "));
        }
        if let Some(url) = &item.url {
            out.link(url, "entry-url", &muted(theme), url);
        }
        out.close();
    }

    fn certification(&self, out: &mut Markup, item: &CertificationItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry certification", &Style::new().prop("margin", "2px 0"));
        let issued = item.issue_date.as_deref().map(format_date);
        let expires = item
            .expiration_date
            .as_deref()
            .map(|d| format!("valid through {}", format_date(d)));
        let line = join_present(
            &[
                Some(item.name.as_str()),
                Some(item.issuer.as_str()),
                issued.as_deref(),
                expires.as_deref(),
            ],
            ", ",
        );
        out.element("span", "entry-line", &Style::new(), &line);
        if let Some(id) = &item.credential_id {
            out.element("span", "entry-credential", &muted(theme), &format!(" (#{id})"));
        }
        out.close();
    }

    fn custom(&self, out: &mut Markup, item: &CustomSectionItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry custom", &Self::entry(theme));
        let date = item.date.as_deref().map(format_date);
        entry_title_row(out, &item.title, &Self::org(theme), date.as_deref(), &muted(theme));
        if let Some(subtitle) = &item.subtitle {
            out.element("div", "entry-role", &Self::role(theme), subtitle);
        }
        bullet_list(out, &item.description, &Style::new().prop("margin", "6px 0"));
        out.close();
    }
}
