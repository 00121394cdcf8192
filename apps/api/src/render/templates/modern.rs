//! Modern: accent bar under the name, headings with a colored left rule,
//! skills and technologies as rounded chips.

use crate::models::resume::{PersonalInfo, SectionType};
use crate::render::document::EntryFormatter;
use crate::render::format::{date_range, format_date};
use crate::render::html::{Markup, Style};
use crate::render::templates::{
    bullet_list, contact_and_summary, degree_label, entry_title_row, heading_font, join_present,
    muted, tag_list,
};
use crate::sections::{
    CertificationItem, CustomSectionItem, EducationItem, ExperienceItem, ProjectItem, SkillsItem,
};
use crate::theme::AppliedTheme;

pub struct ModernFormatter;

fn chip(theme: &AppliedTheme) -> Style {
    Style::new()
        .prop("display", "inline-block")
        .prop("padding", "2px 8px")
        .prop("margin", "2px 4px 2px 0")
        .prop("border-radius", "999px")
        .prop("background", &theme.color_scheme.secondary)
        .prop("color", &theme.color_scheme.primary)
        .px("font-size", theme.typography.font_size.small)
}

fn title(theme: &AppliedTheme) -> Style {
    Style::new()
        .prop("font-weight", "600")
        .px("font-size", theme.typography.font_size.subheading)
}

fn accent_line(theme: &AppliedTheme) -> Style {
    Style::new().prop("color", &theme.color_scheme.accent)
}

fn card(theme: &AppliedTheme) -> Style {
    Style::new().px("margin-bottom", theme.layout.item_spacing)
}

impl EntryFormatter for ModernFormatter {
    fn header(&self, out: &mut Markup, info: &PersonalInfo, theme: &AppliedTheme) {
        let header = Style::new().prop("text-align", theme.layout.header_alignment.as_css());
        out.open_styled("header", "resume-header", &header);

        let name = heading_font(theme)
            .px("font-size", theme.typography.font_size.name)
            .prop("color", &theme.color_scheme.text.primary)
            .prop("margin", "0");
        out.element("h1", "name", &name, &info.full_name);

        let bar = Style::new()
            .prop("width", "64px")
            .prop("height", "4px")
            .prop("margin", "8px 0")
            .prop("background", &theme.color_scheme.accent);
        out.element("div", "accent-bar", &bar, "");

        contact_and_summary(out, info, "  •  ", &muted(theme), theme);
        out.close();
    }

    fn section_heading(&self, out: &mut Markup, title: &str, theme: &AppliedTheme) {
        let style = heading_font(theme)
            .px("font-size", theme.typography.font_size.heading)
            .prop("color", &theme.color_scheme.primary)
            .prop("border-left", &format!("4px solid {}", theme.color_scheme.accent))
            .prop("padding-left", "8px");
        out.element("h2", "section-title", &style, title);
    }

    fn section_body_class(&self, section_type: SectionType) -> &'static str {
        match section_type {
            SectionType::Skills => "section-body chip-grid",
            SectionType::Projects => "section-body card-grid",
            _ => "section-body entry-list",
        }
    }

    fn experience(&self, out: &mut Markup, item: &ExperienceItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry experience", &card(theme));
        let dates = date_range(item.start_date.as_deref(), item.end_date.as_deref(), item.current);
        entry_title_row(out, &item.position, &title(theme), dates.as_deref(), &muted(theme));
        let org = join_present(&[Some(item.company.as_str()), item.location.as_deref()], " · ");
        out.element("div", "entry-org", &accent_line(theme), &org);
        bullet_list(out, &item.description, &Style::new().prop("padding-left", "18px"));
        tag_list(out, &item.skills, "entry-tags", &chip(theme));
        out.close();
    }

    fn education(&self, out: &mut Markup, item: &EducationItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry education", &card(theme));
        let dates = date_range(item.start_date.as_deref(), item.end_date.as_deref(), false);
        entry_title_row(
            out,
            &degree_label(&item.degree, item.field.as_deref()),
            &title(theme),
            dates.as_deref(),
            &muted(theme),
        );
        let gpa = item.gpa.as_ref().map(|g| format!("GPA {g}"));
        let org = join_present(
            &[Some(item.institution.as_str()), item.location.as_deref(), gpa.as_deref()],
            " · ",
        );
        out.element("div", "entry-org", &accent_line(theme), &org);
        out.close();
    }

    fn skills(&self, out: &mut Markup, item: &SkillsItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry skills", &card(theme));
        let label = Style::new()
            .prop("font-weight", "600")
            .prop("color", &theme.color_scheme.text.secondary);
        out.element("div", "skill-category", &label, &item.category);
        tag_list(out, &item.skills, "entry-tags", &chip(theme));
        out.close();
    }

    fn project(&self, out: &mut Markup, item: &ProjectItem, theme: &AppliedTheme) {
        let style = card(theme)
            .prop("padding", "8px")
            .prop("border", &format!("1px solid {}", theme.color_scheme.border))
            .prop("border-radius", "6px");
        out.open_styled("div", "entry project", &style);
        let dates = date_range(item.start_date.as_deref(), item.end_date.as_deref(), false);
        entry_title_row(out, &item.name, &title(theme), dates.as_deref(), &muted(theme));
        if let Some(description) = &item.description {
            out.element(
                "p",
                "entry-description",
                &Style::new().prop("margin", "4px 0"),
                description,
            );
        }
        tag_list(out, &item.technologies, "entry-tags", &chip(theme));
        if let Some(url) = &item.url {
            out.link(url, "entry-url", &accent_line(theme), url);
        }
        out.close();
    }

    fn certification(&self, out: &mut Markup, item: &CertificationItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry certification", &card(theme));
        let issued = item.issue_date.as_deref().map(format_date);
        entry_title_row(out, &item.name, &title(theme), issued.as_deref(), &muted(theme));
        let expiry = item
            .expiration_date
            .as_deref()
            .map(|d| format!("Expires {}", format_date(d)));
        let line = join_present(&[Some(item.issuer.as_str()), expiry.as_deref()], " · ");
        out.element("div", "entry-issuer", &accent_line(theme), &line);
        if let Some(id) = &item.credential_id {
            out.element("div", "entry-credential", &muted(theme), &format!("ID {id}"));
        }
        out.close();
    }

    fn custom(&self, out: &mut Markup, item: &CustomSectionItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry custom", &card(theme));
        let date = item.date.as_deref().map(format_date);
        entry_title_row(out, &item.title, &title(theme), date.as_deref(), &muted(theme));
        if let Some(subtitle) = &item.subtitle {
            out.element("div", "entry-subtitle", &accent_line(theme), subtitle);
        }
        bullet_list(out, &item.description, &Style::new().prop("padding-left", "18px"));
        out.close();
    }
}
