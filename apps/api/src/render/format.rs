use chrono::NaiveDate;

pub const PRESENT: &str = "Present";

/// Formats a résumé date for display.
///
/// `2022-01` and `2022-01-15` become `Jan 2022`; a bare year stays as is;
/// "present"/"current" become [`PRESENT`]. Anything unparseable is shown verbatim.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("present") || trimmed.eq_ignore_ascii_case("current") {
        return PRESENT.to_string();
    }

    match parse_date(trimmed) {
        Some(date) => date.format("%b %Y").to_string(),
        None => trimmed.to_string(),
    }
}

/// `YYYY-MM-DD` or `YYYY-MM` (read as the first of the month).
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d"))
        .ok()
}

/// Start–end label. An open end (missing, blank, or `current`) reads as [`PRESENT`]
/// once there is a start date; with no dates at all there is no label.
pub fn date_range(start: Option<&str>, end: Option<&str>, current: bool) -> Option<String> {
    let start = start.map(format_date).filter(|s| !s.is_empty());
    let end = end.map(format_date).filter(|s| !s.is_empty());

    match (start, end) {
        (None, None) if current => Some(PRESENT.to_string()),
        (None, None) => None,
        (Some(s), _) if current => Some(format!("{s} – {PRESENT}")),
        (Some(s), Some(e)) => Some(format!("{s} – {e}")),
        (Some(s), None) => Some(format!("{s} – {PRESENT}")),
        (None, Some(e)) => Some(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_and_full_dates() {
        assert_eq!(format_date("2022-01"), "Jan 2022");
        assert_eq!(format_date("2019-11-30"), "Nov 2019");
    }

    #[test]
    fn test_passthrough_and_present() {
        assert_eq!(format_date("2020"), "2020");
        assert_eq!(format_date("Spring 2020"), "Spring 2020");
        assert_eq!(format_date(" present "), "Present");
    }

    #[test]
    fn test_open_ended_range() {
        assert_eq!(
            date_range(Some("2022-01"), None, false).as_deref(),
            Some("Jan 2022 – Present")
        );
        assert_eq!(
            date_range(Some("2022-01"), Some("2023-06"), true).as_deref(),
            Some("Jan 2022 – Present")
        );
    }

    #[test]
    fn test_closed_and_partial_ranges() {
        assert_eq!(
            date_range(Some("2018-09"), Some("2022-05"), false).as_deref(),
            Some("Sep 2018 – May 2022")
        );
        assert_eq!(date_range(None, Some("2022-05"), false).as_deref(), Some("May 2022"));
        assert_eq!(date_range(None, None, false), None);
        assert_eq!(date_range(Some(""), None, false), None);
    }
}
