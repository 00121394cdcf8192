#![allow(dead_code)]

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ────────────────────────────────────────────────────────────────────────────
// Item shapes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub company: String,
    pub position: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub current: bool,
    #[serde(default, deserialize_with = "opt_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lines")]
    pub description: Vec<String>,
    #[serde(default, deserialize_with = "lines")]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub institution: String,
    pub degree: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub field: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub location: Option<String>,
    /// Accepts `3.8` as well as `"3.8/4.0"`.
    #[serde(default, deserialize_with = "opt_text")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillsItem {
    pub category: String,
    #[serde(default, deserialize_with = "lines")]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    pub name: String,
    #[serde(default, deserialize_with = "lines")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CertificationItem {
    pub name: String,
    pub issuer: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub issue_date: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub expiration_date: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub credential_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomSectionItem {
    pub title: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lines")]
    pub description: Vec<String>,
}

/// A section item after classification.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionItem {
    Experience(ExperienceItem),
    Education(EducationItem),
    Skills(SkillsItem),
    Project(ProjectItem),
    Certification(CertificationItem),
    Custom(CustomSectionItem),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Experience,
    Education,
    Skills,
    Project,
    Certification,
    Custom,
}

impl ItemKind {
    pub fn from_tag(tag: &str) -> Option<ItemKind> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "experience" => Some(ItemKind::Experience),
            "education" => Some(ItemKind::Education),
            "skills" | "skill" => Some(ItemKind::Skills),
            "project" | "projects" => Some(ItemKind::Project),
            "certification" | "certifications" => Some(ItemKind::Certification),
            "custom" => Some(ItemKind::Custom),
            _ => None,
        }
    }

    /// Reads `raw` as this kind's shape. `None` when a required field is missing
    /// or has the wrong JSON type.
    pub fn read(&self, raw: &Value) -> Option<SectionItem> {
        let raw = raw.clone();
        let item = match self {
            ItemKind::Experience => SectionItem::Experience(serde_json::from_value(raw).ok()?),
            ItemKind::Education => SectionItem::Education(serde_json::from_value(raw).ok()?),
            ItemKind::Skills => SectionItem::Skills(serde_json::from_value(raw).ok()?),
            ItemKind::Project => SectionItem::Project(serde_json::from_value(raw).ok()?),
            ItemKind::Certification => {
                SectionItem::Certification(serde_json::from_value(raw).ok()?)
            }
            ItemKind::Custom => SectionItem::Custom(serde_json::from_value(raw).ok()?),
        };
        Some(item)
    }
}

impl SectionItem {
    pub fn kind(&self) -> ItemKind {
        match self {
            SectionItem::Experience(_) => ItemKind::Experience,
            SectionItem::Education(_) => ItemKind::Education,
            SectionItem::Skills(_) => ItemKind::Skills,
            SectionItem::Project(_) => ItemKind::Project,
            SectionItem::Certification(_) => ItemKind::Certification,
            SectionItem::Custom(_) => ItemKind::Custom,
        }
    }

    /// Human-readable text carried by the item (dates and urls excluded).
    pub fn text_fragments(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        match self {
            SectionItem::Experience(e) => {
                out.extend([e.company.as_str(), e.position.as_str()]);
                out.extend(e.location.as_deref());
                out.extend(e.description.iter().map(String::as_str));
                out.extend(e.skills.iter().map(String::as_str));
            }
            SectionItem::Education(e) => {
                out.extend([e.institution.as_str(), e.degree.as_str()]);
                out.extend(e.field.as_deref());
                out.extend(e.location.as_deref());
            }
            SectionItem::Skills(s) => {
                out.push(s.category.as_str());
                out.extend(s.skills.iter().map(String::as_str));
            }
            SectionItem::Project(p) => {
                out.push(p.name.as_str());
                out.extend(p.technologies.iter().map(String::as_str));
                out.extend(p.description.as_deref());
            }
            SectionItem::Certification(c) => {
                out.extend([c.name.as_str(), c.issuer.as_str()]);
            }
            SectionItem::Custom(c) => {
                out.push(c.title.as_str());
                out.extend(c.subtitle.as_deref());
                out.extend(c.description.iter().map(String::as_str));
            }
        }
        out
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Lenient field readers for hand-edited and imported data
// ────────────────────────────────────────────────────────────────────────────

/// A list of strings from either an array or a newline-separated string.
/// Non-text entries are dropped; `null` yields an empty list.
fn lines<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect(),
        Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        _ => vec![],
    })
}

/// An optional string, also accepting numbers and booleans. Blank strings are `None`.
fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(value))
}

/// A boolean that tolerates `null`, `"true"`/`"false"` and other junk (read as `false`).
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_description_accepts_string_or_array() {
        let a: CustomSectionItem =
            serde_json::from_value(json!({ "title": "T", "description": "one\n\ntwo" })).unwrap();
        let b: CustomSectionItem =
            serde_json::from_value(json!({ "title": "T", "description": ["one", 2, null] }))
                .unwrap();
        assert_eq!(a.description, vec!["one", "two"]);
        assert_eq!(b.description, vec!["one", "2"]);
    }

    #[test]
    fn test_current_flag_is_lenient() {
        let read = |current: Value| -> ExperienceItem {
            serde_json::from_value(
                json!({ "company": "Acme", "position": "Engineer", "current": current }),
            )
            .unwrap()
        };
        assert!(!read(Value::Null).current);
        assert!(!read(json!("soon")).current);
        assert!(!read(json!(1)).current);
        assert!(read(json!(true)).current);
        assert!(read(json!(" TRUE ")).current);
    }

    #[test]
    fn test_numeric_gpa_and_null_fields() {
        let e: EducationItem = serde_json::from_value(json!({
            "institution": "MIT",
            "degree": "BSc",
            "gpa": 3.9,
            "location": null,
            "field": "  "
        }))
        .unwrap();
        assert_eq!(e.gpa.as_deref(), Some("3.9"));
        assert!(e.location.is_none());
        assert!(e.field.is_none());
    }

    #[test]
    fn test_wrong_type_for_required_field_fails_read() {
        assert!(ItemKind::Experience
            .read(&json!({ "company": 5, "position": "Engineer" }))
            .is_none());
    }

    #[test]
    fn test_kind_tag_aliases() {
        assert_eq!(ItemKind::from_tag("Projects"), Some(ItemKind::Project));
        assert_eq!(ItemKind::from_tag("skill"), Some(ItemKind::Skills));
        assert_eq!(ItemKind::from_tag("award"), None);
    }
}
