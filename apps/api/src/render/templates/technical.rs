//! Technical: compact, code-flavoured. Headings render as comments, skills and
//! technologies as inline code spans.

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

pub struct TechnicalFormatter;

fn code(theme: &AppliedTheme) -> Style {
    Style::new()
        .prop("font-family", &theme.typography.heading_font)
        .px("font-size", theme.typography.font_size.small)
        .prop("padding", "1px 5px")
        .prop("margin-right", "4px")
        .prop("border", &format!("1px solid {}", theme.color_scheme.border))
        .prop("border-radius", "3px")
        .prop("color", &theme.color_scheme.primary)
}

fn strong(theme: &AppliedTheme) -> Style {
    Style::new()
        .prop("font-weight", "700")
        .px("font-size", theme.typography.font_size.subheading)
}

fn dates(theme: &AppliedTheme) -> Style {
    muted(theme).prop("font-family", &theme.typography.heading_font)
}

fn compact(theme: &AppliedTheme) -> Style {
    Style::new().px("margin-bottom", theme.layout.item_spacing * 0.75)
}

impl EntryFormatter for TechnicalFormatter {
    fn header(&self, out: &mut Markup, info: &PersonalInfo, theme: &AppliedTheme) {
        let header = Style::new()
            .prop("text-align", theme.layout.header_alignment.as_css())
            .prop("border-bottom", &format!("1px dashed {}", theme.color_scheme.border))
            .px("padding-bottom", theme.layout.item_spacing);
        out.open_styled("header", "resume-header", &header);

        let name = heading_font(theme)
            .px("font-size", theme.typography.font_size.name)
            .prop("color", &theme.color_scheme.primary)
            .prop("margin", "0");
        out.element("h1", "name", &name, &info.full_name);

        let contact = muted(theme).prop("font-family", &theme.typography.heading_font);
        contact_and_summary(out, info, " :: ", &contact, theme);
        out.close();
    }

    fn section_heading(&self, out: &mut Markup, title: &str, theme: &AppliedTheme) {
        let style = heading_font(theme)
            .px("font-size", theme.typography.font_size.heading)
            .prop("color", &theme.color_scheme.accent);
        out.element("h2", "section-title", &style, &format!("// {}", title.to_lowercase()));
    }

    fn section_body_class(&self, section_type: SectionType) -> &'static str {
        match section_type {
            SectionType::Skills => "section-body skills-table",
            _ => "section-body entry-list compact",
        }
    }

    fn experience(&self, out: &mut Markup, item: &ExperienceItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry experience", &compact(theme));
        let title = format!("{} @ {}", item.position, item.company);
        let range = date_range(item.start_date.as_deref(), item.end_date.as_deref(), item.current);
        entry_title_row(out, &title, &strong(theme), range.as_deref(), &dates(theme));
        if let Some(location) = &item.location {
            out.element("div", "entry-location", &muted(theme), location);
        }
        bullet_list(out, &item.description, &Style::new().prop("margin", "2px 0 4px 0"));
        tag_list(out, &item.skills, "entry-stack", &code(theme));
        out.close();
    }

    fn education(&self, out: &mut Markup, item: &EducationItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry education", &compact(theme));
        let range = date_range(item.start_date.as_deref(), item.end_date.as_deref(), false);
        entry_title_row(
            out,
            &degree_label(&item.degree, item.field.as_deref()),
            &strong(theme),
            range.as_deref(),
            &dates(theme),
        );
        let gpa = item.gpa.as_ref().map(|g| format!("gpa={g}"));
        let line = join_present(
            &[Some(item.institution.as_str()), item.location.as_deref(), gpa.as_deref()],
            " | ",
        );
        out.element("div", "entry-org", &muted(theme), &line);
        out.close();
    }

    fn skills(&self, out: &mut Markup, item: &SkillsItem, theme: &AppliedTheme) {
        let row = Style::new()
            .prop("display", "flex")
            .prop("flex-wrap", "wrap")
            .prop("align-items", "baseline")
            .prop("margin", "2px 0");
        out.open_styled("div", "entry skills", &row);
        let label = strong(theme)
            .prop("font-family", &theme.typography.heading_font)
            .prop("min-width", "120px");
        out.element("span", "skill-category", &label, &format!("{}:", item.category));
        tag_list(out, &item.skills, "skill-list", &code(theme));
        out.close();
    }

    fn project(&self, out: &mut Markup, item: &ProjectItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry project", &compact(theme));
        let range = date_range(item.start_date.as_deref(), item.end_date.as_deref(), false);
        entry_title_row(out, &item.name, &strong(theme), range.as_deref(), &dates(theme));
        tag_list(out, &item.technologies, "entry-stack", &code(theme));
        if let Some(description) = &item.description {
            out.element(
                "p",
                "entry-description",
                &Style::new().prop("margin", "2px 0"),
                description,
            );
        }
        if let Some(url) = &item.url {
            out.link(url, "entry-url", &dates(theme), url);
        }
        out.close();
    }

    fn certification(&self, out: &mut Markup, item: &CertificationItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry certification", &compact(theme));
        let issued = item.issue_date.as_deref().map(format_date);
        entry_title_row(out, &item.name, &strong(theme), issued.as_deref(), &dates(theme));
        let expiry = item
            .expiration_date
            .as_deref()
            .map(|d| format!("exp {}", format_date(d)));
        let id = item.credential_id.as_ref().map(|i| format!("id={i}"));
        let line = join_present(
            &[Some(item.issuer.as_str()), expiry.as_deref(), id.as_deref()],
            " | ",
        );
        out.element("div", "entry-issuer", &muted(theme), &line);
        out.close();
    }

    fn custom(&self, out: &mut Markup, item: &CustomSectionItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry custom", &compact(theme));
        let date = item.date.as_deref().map(format_date);
        entry_title_row(out, &item.title, &strong(theme), date.as_deref(), &dates(theme));
        if let Some(subtitle) = &item.subtitle {
            out.element("div", "entry-subtitle", &muted(theme), subtitle);
        }
        bullet_list(out, &item.description, &Style::new().prop("margin", "2px 0 4px 0"));
        out.close();
    }
}
