use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::resume::Resume;
use crate::render::format::parse_date;
use crate::sections::{classify_item, SectionItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// False when any issue is an error. Warnings never fail a résumé.
    pub passed: bool,
    pub issues: Vec<ValidationIssue>,
    pub word_count: usize,
    pub skipped_items: usize,
}

impl ValidationIssue {
    fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            section_id: None,
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn warning(section_id: Option<&str>, field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            section_id: section_id.map(str::to_string),
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Checks a résumé for problems that would make the rendered preview look broken.
///
/// Only hidden sections are exempt from the per-section checks; duplicate
/// `order` values are reported across visible sections since they make the
/// render order depend on input order.
pub fn validate_resume(resume: &Resume) -> ValidationReport {
    let mut issues = Vec::new();

    let info = &resume.personal_info;
    if info.full_name.trim().is_empty() {
        issues.push(ValidationIssue::error("personalInfo.fullName", "Full name is required"));
    }
    if info.email.trim().is_empty() {
        issues.push(ValidationIssue::warning(
            None,
            "personalInfo.email",
            "No email address; recruiters will have no way to reach you",
        ));
    }

    let visible = resume.visible_sections();

    let mut orders: HashMap<i32, Vec<&str>> = HashMap::new();
    for section in &visible {
        orders.entry(section.order).or_default().push(&section.id);
    }
    let mut clashes: Vec<(i32, Vec<&str>)> =
        orders.into_iter().filter(|(_, ids)| ids.len() > 1).collect();
    clashes.sort_by_key(|(order, _)| *order);
    for (order, ids) in clashes {
        issues.push(ValidationIssue::warning(
            None,
            "sections.order",
            format!("Sections {} share order {order}", ids.join(", ")),
        ));
    }

    let mut skipped_items = 0;
    for section in &visible {
        let id = Some(section.id.as_str());
        if section.items.is_empty() {
            issues.push(ValidationIssue::warning(
                id,
                "items",
                format!("Section \"{}\" is visible but has no items", section.title),
            ));
            continue;
        }

        for (index, raw) in section.items.iter().enumerate() {
            match classify_item(raw) {
                None => {
                    skipped_items += 1;
                    issues.push(ValidationIssue::warning(
                        id,
                        &format!("items[{index}]"),
                        "Item has no recognizable shape and will not be rendered",
                    ));
                }
                Some(SectionItem::Experience(exp)) => {
                    let start = exp.start_date.as_deref().and_then(parse_date);
                    let end = exp.end_date.as_deref().and_then(parse_date);
                    if let (Some(start), Some(end)) = (start, end) {
                        if end < start && !exp.current {
                            let role = format!("{} at {}", exp.position, exp.company);
                            issues.push(ValidationIssue::warning(
                                id,
                                &format!("items[{index}].endDate"),
                                format!("{role} ends before it starts"),
                            ));
                        }
                    }
                }
                Some(_) => {}
            }
        }
    }

    ValidationReport {
        passed: !issues.iter().any(|i| i.severity == Severity::Error),
        issues,
        word_count: resume.word_count(),
        skipped_items,
    }
}
