//! Classic: single column, name centered over a rule, ruled section headings.
//! Also the fallback for unknown template ids, so it stays plain and ATS-friendly.

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

pub struct ClassicFormatter;

impl ClassicFormatter {
    fn entry_style(theme: &AppliedTheme) -> Style {
        Style::new().px("margin-bottom", theme.layout.item_spacing)
    }

    fn title_style(theme: &AppliedTheme) -> Style {
        Style::new()
            .prop("font-weight", "600")
            .px("font-size", theme.typography.font_size.subheading)
            .prop("color", &theme.color_scheme.text.primary)
    }
}

impl EntryFormatter for ClassicFormatter {
    fn header(&self, out: &mut Markup, info: &PersonalInfo, theme: &AppliedTheme) {
        let header = Style::new()
            .prop("text-align", theme.layout.header_alignment.as_css())
            .prop("border-bottom", &format!("2px solid {}", theme.color_scheme.primary))
            .px("padding-bottom", theme.layout.item_spacing);
        out.open_styled("header", "resume-header", &header);

        let name = heading_font(theme)
            .px("font-size", theme.typography.font_size.name)
            .prop("color", &theme.color_scheme.primary)
            .prop("margin", "0");
        out.element("h1", "name", &name, &info.full_name);
        contact_and_summary(out, info, " | ", &muted(theme), theme);

        out.close();
    }

    fn section_heading(&self, out: &mut Markup, title: &str, theme: &AppliedTheme) {
        let mut style = heading_font(theme)
            .px("font-size", theme.typography.font_size.heading)
            .prop("color", &theme.color_scheme.primary)
            .prop("text-transform", "uppercase")
            .prop("letter-spacing", "0.05em");
        if theme.layout.show_section_dividers {
            style = style.prop(
                "border-bottom",
                &format!("1px solid {}", theme.color_scheme.border),
            );
        }
        out.element("h2", "section-title", &style, title);
    }

    fn experience(&self, out: &mut Markup, item: &ExperienceItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry experience", &Self::entry_style(theme));
        let dates = date_range(item.start_date.as_deref(), item.end_date.as_deref(), item.current);
        entry_title_row(
            out,
            &item.position,
            &Self::title_style(theme),
            dates.as_deref(),
            &muted(theme),
        );

        let org = join_present(&[Some(item.company.as_str()), item.location.as_deref()], ", ");
        let org_style = Style::new()
            .prop("font-style", "italic")
            .prop("color", &theme.color_scheme.text.secondary);
        out.element("div", "entry-org", &org_style, &org);

        bullet_list(out, &item.description, &Style::new().prop("margin", "4px 0"));
        if !item.skills.is_empty() {
            out.element("p", "entry-skills", &muted(theme), &item.skills.join(", "));
        }
        out.close();
    }

    fn education(&self, out: &mut Markup, item: &EducationItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry education", &Self::entry_style(theme));
        let dates = date_range(item.start_date.as_deref(), item.end_date.as_deref(), false);
        entry_title_row(
            out,
            &degree_label(&item.degree, item.field.as_deref()),
            &Self::title_style(theme),
            dates.as_deref(),
            &muted(theme),
        );
        let org = join_present(&[Some(item.institution.as_str()), item.location.as_deref()], ", ");
        out.element("div", "entry-org", &Style::new().prop("font-style", "italic"), &org);
        if let Some(gpa) = &item.gpa {
            out.element("p", "entry-gpa", &muted(theme), &format!("GPA: {gpa}"));
        }
        out.close();
    }

    fn skills(&self, out: &mut Markup, item: &SkillsItem, _theme: &AppliedTheme) {
        out.open_styled("p", "entry skills", &Style::new().prop("margin", "2px 0"));
        out.element("strong", "skill-category", &Style::new(), &format!("{}: ", item.category));
        out.text(&item.skills.join(", "));
        out.close();
    }

    fn project(&self, out: &mut Markup, item: &ProjectItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry project", &Self::entry_style(theme));
        let dates = date_range(item.start_date.as_deref(), item.end_date.as_deref(), false);
        entry_title_row(
            out,
            &item.name,
            &Self::title_style(theme),
            dates.as_deref(),
            &muted(theme),
        );
        if let Some(description) = &item.description {
            out.element(
                "p",
                "entry-description",
                &Style::new().prop("margin", "2px 0"),
                description,
            );
        }
        if !item.technologies.is_empty() {
            out.element(
                "p",
                "entry-technologies",
                &muted(theme),
                &format!("Technologies: {}", item.technologies.join(", ")),
            );
        }
        if let Some(url) = &item.url {
            out.link(url, "entry-url", &muted(theme), url);
        }
        out.close();
    }

    fn certification(&self, out: &mut Markup, item: &CertificationItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry certification", &Self::entry_style(theme));
        let issued = item.issue_date.as_deref().map(format_date);
        entry_title_row(
            out,
            &item.name,
            &Self::title_style(theme),
            issued.as_deref(),
            &muted(theme),
        );
        out.element(
            "div",
            "entry-issuer",
            &Style::new().prop("font-style", "italic"),
            &item.issuer,
        );
        if let Some(expires) = &item.expiration_date {
            out.element(
                "p",
                "entry-expiry",
                &muted(theme),
                &format!("Expires {}", format_date(expires)),
            );
        }
        if let Some(id) = &item.credential_id {
            out.element("p", "entry-credential", &muted(theme), &format!("Credential ID: {id}"));
        }
        out.close();
    }

    fn custom(&self, out: &mut Markup, item: &CustomSectionItem, theme: &AppliedTheme) {
        out.open_styled("div", "entry custom", &Self::entry_style(theme));
        let date = item.date.as_deref().map(format_date);
        entry_title_row(
            out,
            &item.title,
            &Self::title_style(theme),
            date.as_deref(),
            &muted(theme),
        );
        if let Some(subtitle) = &item.subtitle {
            out.element(
                "div",
                "entry-subtitle",
                &Style::new().prop("font-style", "italic"),
                subtitle,
            );
        }
        bullet_list(out, &item.description, &Style::new().prop("margin", "4px 0"));
        out.close();
    }
}
