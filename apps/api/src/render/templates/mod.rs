// Per-template entry formatters plus the small markup pieces they share.

pub mod classic;
pub mod creative;
pub mod executive;
pub mod modern;
pub mod technical;

pub use classic::ClassicFormatter;
pub use creative::CreativeFormatter;
pub use executive::ExecutiveFormatter;
pub use modern::ModernFormatter;
pub use technical::TechnicalFormatter;

use crate::models::resume::PersonalInfo;
use crate::render::html::{Markup, Style};
use crate::theme::AppliedTheme;

/// Body text in the secondary text color at the small size.
pub(crate) fn muted(theme: &AppliedTheme) -> Style {
    Style::new()
        .prop("color", &theme.color_scheme.text.secondary)
        .px("font-size", theme.typography.font_size.small)
}

pub(crate) fn heading_font(theme: &AppliedTheme) -> Style {
    Style::new()
        .prop("font-family", &theme.typography.heading_font)
        .num("font-weight", f32::from(theme.typography.heading_weight))
}

/// Contact fields joined by `separator`, then the summary paragraph if present.
pub(crate) fn contact_and_summary(
    out: &mut Markup,
    info: &PersonalInfo,
    separator: &str,
    contact_style: &Style,
    theme: &AppliedTheme,
) {
    let contacts = info.contact_fields();
    if !contacts.is_empty() {
        out.element("p", "contact", contact_style, &contacts.join(separator));
    }
    if let Some(summary) = info.summary.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        let style = Style::new()
            .px("margin-top", theme.layout.item_spacing)
            .prop("color", &theme.color_scheme.text.primary);
        out.element("p", "summary", &style, summary);
    }
}

/// `<ul>` of non-empty lines; nothing at all when there are none.
pub(crate) fn bullet_list(out: &mut Markup, lines: &[String], style: &Style) {
    let lines: Vec<&str> = lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();
    if lines.is_empty() {
        return;
    }
    out.open_styled("ul", "entry-bullets", style);
    for line in lines {
        out.element("li", "", &Style::new(), line);
    }
    out.close();
}

/// Inline tags (skills, technologies).
pub(crate) fn tag_list(out: &mut Markup, tags: &[String], class: &str, tag_style: &Style) {
    if tags.is_empty() {
        return;
    }
    out.open("div", class);
    for tag in tags {
        out.element("span", "tag", tag_style, tag);
    }
    out.close();
}

/// Title on the left, date label on the right.
pub(crate) fn entry_title_row(
    out: &mut Markup,
    title: &str,
    title_style: &Style,
    date: Option<&str>,
    date_style: &Style,
) {
    let row = Style::new()
        .prop("display", "flex")
        .prop("justify-content", "space-between")
        .prop("align-items", "baseline");
    out.open_styled("div", "entry-title-row", &row);
    out.element("span", "entry-title", title_style, title);
    if let Some(date) = date {
        out.element("span", "entry-date", date_style, date);
    }
    out.close();
}

/// "Degree in Field" or just the degree.
pub(crate) fn degree_label(degree: &str, field: Option<&str>) -> String {
    match field {
        Some(field) => format!("{degree} in {field}"),
        None => degree.to_string(),
    }
}

/// Joins the present parts with `separator`.
pub(crate) fn join_present(parts: &[Option<&str>], separator: &str) -> String {
    parts
        .iter()
        .flatten()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_present_skips_missing() {
        assert_eq!(
            join_present(&[Some("Acme"), None, Some(" "), Some("Remote")], " · "),
            "Acme · Remote"
        );
    }

    #[test]
    fn test_degree_label() {
        assert_eq!(degree_label("BSc", Some("Physics")), "BSc in Physics");
        assert_eq!(degree_label("MBA", None), "MBA");
    }

    #[test]
    fn test_bullet_list_empty_renders_nothing() {
        let mut m = Markup::new();
        bullet_list(&mut m, &["  ".to_string()], &Style::new());
        assert_eq!(m.finish(), "");
    }
}
