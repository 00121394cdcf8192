#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub metadata: ResumeMetadata,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub summary: Option<String>,
}

impl PersonalInfo {
    /// Contact fields in display order, skipping blanks.
    pub fn contact_fields(&self) -> Vec<&str> {
        let optional = [
            &self.phone,
            &self.location,
            &self.website,
            &self.linkedin,
            &self.github,
        ];
        std::iter::once(self.email.as_str())
            .chain(optional.into_iter().filter_map(|f| f.as_deref()))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Bookkeeping only; a partial or stale object fills the gaps with defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeMetadata {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: u32,
    pub export_count: u32,
    pub word_count: u32,
}

impl Default for ResumeMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            version: 1,
            export_count: 0,
            word_count: 0,
        }
    }
}

/// Section kinds known to the renderers. Any other string deserializes as `Custom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    #[serde(other)]
    Custom,
}

impl Default for SectionType {
    fn default() -> Self {
        SectionType::Custom
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub section_type: SectionType,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Items are kept untyped; the shape is resolved at render time by
    /// `sections::classify_item`.
    #[serde(default)]
    pub items: Vec<Value>,
}

fn default_visible() -> bool {
    true
}

impl Resume {
    /// Visible sections in render order. The sort is stable, so equal `order`
    /// values keep their relative position.
    pub fn visible_sections(&self) -> Vec<&Section> {
        let mut visible: Vec<&Section> = self.sections.iter().filter(|s| s.visible).collect();
        visible.sort_by_key(|s| s.order);
        visible
    }

    /// Word count over the summary and every classifiable item in visible sections.
    pub fn word_count(&self) -> usize {
        let summary = self
            .personal_info
            .summary
            .as_deref()
            .map(count_words)
            .unwrap_or(0);

        let items: usize = self
            .visible_sections()
            .into_iter()
            .flat_map(|s| s.items.iter())
            .filter_map(crate::sections::classify_item)
            .map(|item| item.text_fragments().iter().map(|t| count_words(t)).sum::<usize>())
            .sum();

        summary + items
    }
}

fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn section(title: &str, order: i32, visible: bool) -> Section {
        Section {
            id: title.to_lowercase(),
            section_type: SectionType::Custom,
            title: title.to_string(),
            order,
            visible,
            items: vec![],
        }
    }

    #[test]
    fn test_partial_metadata_is_accepted() {
        let resume: Resume = serde_json::from_value(json!({
            "personalInfo": { "fullName": "Jane Doe" },
            "metadata": { "wordCount": 12 }
        }))
        .unwrap();
        assert_eq!(resume.metadata.word_count, 12);
        assert_eq!(resume.metadata.version, 1);
        assert_eq!(resume.metadata.export_count, 0);
    }

    #[test]
    fn test_unknown_section_type_is_custom() {
        let s: Section = serde_json::from_value(json!({
            "id": "s1",
            "type": "volunteering",
            "title": "Volunteering",
            "order": 0,
            "visible": true,
            "items": []
        }))
        .unwrap();
        assert_eq!(s.section_type, SectionType::Custom);
    }

    #[test]
    fn test_visible_sections_sorted_and_filtered() {
        let resume = Resume {
            sections: vec![
                section("C", 2, true),
                section("A", 0, true),
                section("Hidden", 1, false),
                section("B", 1, true),
            ],
            ..minimal_resume()
        };
        let titles: Vec<_> = resume
            .visible_sections()
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_visible_sections_stable_on_ties() {
        let resume = Resume {
            sections: vec![section("First", 1, true), section("Second", 1, true)],
            ..minimal_resume()
        };
        let titles: Vec<_> = resume
            .visible_sections()
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_contact_fields_skip_blanks() {
        let info = PersonalInfo {
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: Some("  ".to_string()),
            github: Some("github.com/jane".to_string()),
            ..Default::default()
        };
        assert_eq!(info.contact_fields(), vec!["jane@x.com", "github.com/jane"]);
    }

    #[test]
    fn test_word_count_includes_summary_and_items() {
        let mut resume = minimal_resume();
        resume.personal_info.summary = Some("Builds reliable systems".to_string());
        resume.sections.push(Section {
            id: "exp".to_string(),
            section_type: SectionType::Experience,
            title: "Experience".to_string(),
            order: 0,
            visible: true,
            items: vec![json!({
                "company": "Acme",
                "position": "Staff Engineer",
                "description": ["Cut build times in half"]
            })],
        });
        // 3 summary + 1 company + 2 position + 5 description
        assert_eq!(resume.word_count(), 11);
    }

    fn minimal_resume() -> Resume {
        serde_json::from_value(json!({ "personalInfo": { "fullName": "Jane Doe" } })).unwrap()
    }
}
