//! Creative: gradient header, timeline-style entries with a colored spine,
//! outlined skill pills.

use crate::models::resume::PersonalInfo;
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

pub struct CreativeFormatter;

fn timeline(theme: &AppliedTheme) -> Style {
    Style::new()
        .prop("position", "relative")
        .prop("padding-left", "16px")
        .prop("border-left", &format!("3px solid {}", theme.color_scheme.accent))
        .px("margin-bottom", theme.layout.item_spacing)
}

fn pill(theme: &AppliedTheme) -> Style {
    Style::new()
        .prop("display", "inline-block")
        .prop("padding", "2px 10px")
        .prop("margin", "3px 6px 3px 0")
        .prop("border", &format!("1.5px solid {}", theme.color_scheme.accent))
        .prop("border-radius", "12px")
        .prop("color", &theme.color_scheme.accent)
        .px("font-size", theme.typography.font_size.small)
}

fn headline(theme: &AppliedTheme) -> Style {
    heading_font(theme)
        .px("font-size", theme.typography.font_size.subheading)
        .prop("color", &theme.color_scheme.primary)
}

fn highlight(theme: &AppliedTheme) -> Style {
    Style::new()
        .prop("color", &theme.color_scheme.accent)
        .prop("font-weight", "600")
}

impl EntryFormatter for CreativeFormatter {
    fn header(&self, out: &mut Markup, info: &PersonalInfo, theme: &AppliedTheme) {
        let banner = Style::new()
            .prop(
                "background",
                &format!(
                    "linear-gradient(135deg, {} 0%, {} 100%)",
                    theme.color_scheme.primary, theme.color_scheme.accent
                ),
            )
            .prop("color", &theme.color_scheme.background)
            .prop("text-align", theme.layout.header_alignment.as_css())
            .prop("border-radius", "12px")
            .prop("padding", "24px");
        out.open_styled("header", "resume-header banner", &banner);

        let name = heading_font(theme)
            .px("font-size", theme.typography.font_size.name)
            .prop("margin", "0");
        out.element("h1", "name", &name, &info.full_name);

        let contact = Style::new()
            .prop("opacity", "0.9")
            .px("font-size", theme.typography.font_size.small);
        contact_and_summary(out, info, "  ✦  ", &contact, theme);
        out.close();
    }

    fn section_heading(&self, out: &mut Markup, title: &str, theme: &AppliedTheme) {
        out.open("div", "section-heading");
        let dot = Style::new()
            .prop("display", "inline-block")
            .prop("width", "10px")
            .prop("height", "10px")
            .prop("margin-right", "8px")
            .prop("border-radius", "50%")
            .prop("background", &theme.color_scheme.accent);
        out.element("span", "heading-dot", &dot, "");
        let style = heading_font(theme)
            .prop("display", "inline")
            .px("font-size", theme.typography.font_size.heading)
            .prop("color", &theme.color_scheme.primary);
        out.element("h2", "section-title", &style, title);
        out.close();
    }

    fn experience(&self, out: &mut Markup, item: &ExperienceItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry experience", &timeline(theme));
        let dates = date_range(item.start_date.as_deref(), item.end_date.as_deref(), item.current);
        if let Some(dates) = &dates {
            out.element("div", "entry-date", &muted(theme), dates);
        }
        out.element("div", "entry-title", &headline(theme), &item.position);
        let org = join_present(&[Some(item.company.as_str()), item.location.as_deref()], ", ");
        out.element("div", "entry-org", &highlight(theme), &org);
        bullet_list(out, &item.description, &Style::new().prop("margin", "4px 0"));
        tag_list(out, &item.skills, "entry-tags", &pill(theme));
        out.close();
    }

    fn education(&self, out: &mut Markup, item: &EducationItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry education", &timeline(theme));
        let dates = date_range(item.start_date.as_deref(), item.end_date.as_deref(), false);
        if let Some(dates) = &dates {
            out.element("div", "entry-date", &muted(theme), dates);
        }
        out.element(
            "div",
            "entry-title",
            &headline(theme),
            &degree_label(&item.degree, item.field.as_deref()),
        );
        let org = join_present(&[Some(item.institution.as_str()), item.location.as_deref()], ", ");
        out.element("div", "entry-org", &highlight(theme), &org);
        if let Some(gpa) = &item.gpa {
            out.element("div", "entry-gpa", &muted(theme), &format!("GPA {gpa}"));
        }
        out.close();
    }

    fn skills(&self, out: &mut Markup, item: &SkillsItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry skills", &Style::new().prop("margin", "4px 0"));
        out.element("div", "skill-category", &headline(theme), &item.category);
        tag_list(out, &item.skills, "skill-pills", &pill(theme));
        out.close();
    }

    fn project(&self, out: &mut Markup, item: &ProjectItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry project", &timeline(theme));
        let dates = date_range(item.start_date.as_deref(), item.end_date.as_deref(), false);
        entry_title_row(out, &item.name, &headline(theme), dates.as_deref(), &muted(theme));
        if let Some(description) = &item.description {
            out.element(
                "p",
                "entry-description",
                &Style::new().prop("margin", "4px 0"),
                description,
            );
        }
        tag_list(out, &item.technologies, "entry-tags", &pill(theme));
        if let Some(url) = &item.url {
            out.link(url, "entry-url", &highlight(theme), url);
        }
        out.close();
    }

    fn certification(&self, out: &mut Markup, item: &CertificationItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry certification", &timeline(theme));
        let issued = item.issue_date.as_deref().map(format_date);
        entry_title_row(out, &item.name, &headline(theme), issued.as_deref(), &muted(theme));
        out.element("div", "entry-issuer", &highlight(theme), &item.issuer);
        if let Some(expires) = &item.expiration_date {
            out.element(
                "div",
                "entry-expiry",
                &muted(theme),
                &format!("Expires {}", format_date(expires)),
            );
        }
        if let Some(id) = &item.credential_id {
            out.element("div", "entry-credential", &muted(theme), &format!("Credential {id}"));
        }
        out.close();
    }

    fn custom(&self, out: &mut Markup, item: &CustomSectionItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry custom", &timeline(theme));
        if let Some(date) = &item.date {
            out.element("div", "entry-date", &muted(theme), &format_date(date));
        }
        out.element("div", "entry-title", &headline(theme), &item.title);
        if let Some(subtitle) = &item.subtitle {
            out.element("div", "entry-subtitle", &highlight(theme), subtitle);
        }
        bullet_list(out, &item.description, &Style::new().prop("margin", "4px 0"));
        out.close();
    }
}
