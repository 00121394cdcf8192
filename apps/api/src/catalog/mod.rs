//! Read-only template catalog.
//!
//! Loaded once at startup from the built-in presets plus, optionally, a
//! directory of `*.json` template files. A file whose id matches a built-in
//! replaces it. Files that fail to parse are skipped with a warning so one bad
//! file cannot take the preview service down.

mod builtin;

pub use builtin::builtin_templates;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::template::{Template, TemplateCategory};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Template directory {path} could not be read: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Listing filter. Every set field must match.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateFilter {
    pub category: Option<TemplateCategory>,
    #[serde(default)]
    pub ats_only: bool,
    pub tag: Option<String>,
    /// Case-insensitive substring over name, description and tags.
    pub search: Option<String>,
}

impl TemplateFilter {
    fn matches(&self, t: &Template) -> bool {
        if self.category.is_some_and(|c| c != t.category) {
            return false;
        }
        if self.ats_only && !t.compatibility.ats_compatible {
            return false;
        }
        if let Some(tag) = &self.tag {
            if !t.metadata.tags.iter().any(|x| x.eq_ignore_ascii_case(tag)) {
                return false;
            }
        }
        if let Some(query) = self.search.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            let query = query.to_lowercase();
            let hit = t.name.to_lowercase().contains(&query)
                || t.description.to_lowercase().contains(&query)
                || t.metadata.tags.iter().any(|x| x.to_lowercase().contains(&query));
            if !hit {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: HashMap<String, Template>,
}

impl TemplateCatalog {
    pub fn builtin() -> Self {
        Self::from_templates(builtin_templates())
    }

    pub fn from_templates(templates: impl IntoIterator<Item = Template>) -> Self {
        let templates = templates.into_iter().map(|t| (t.id.clone(), t)).collect();
        Self { templates }
    }

    /// Built-ins overlaid with every readable `*.json` file in `dir`.
    pub fn load(dir: Option<&Path>) -> Result<Self, CatalogError> {
        let mut catalog = Self::builtin();
        if let Some(dir) = dir {
            let loaded = catalog.load_dir(dir)?;
            info!(loaded, dir = %dir.display(), "Loaded templates from directory");
        }
        info!(templates = catalog.len(), "Template catalog ready");
        Ok(catalog)
    }

    fn load_dir(&mut self, dir: &Path) -> Result<usize, CatalogError> {
        let read_err = |source| CatalogError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
            .map_err(read_err)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            match read_template(&path) {
                Ok(template) => {
                    if self.templates.contains_key(&template.id) {
                        info!(id = %template.id, "Template file overrides built-in");
                    }
                    self.templates.insert(template.id.clone(), template);
                    loaded += 1;
                }
                Err(e) => warn!(path = %path.display(), "Skipping template file: {e}"),
            }
        }
        Ok(loaded)
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.get(id)
    }

    /// Matching templates, most popular first, then by name.
    pub fn list(&self, filter: &TemplateFilter) -> Vec<&Template> {
        let mut out: Vec<&Template> = self
            .templates
            .values()
            .filter(|t| filter.matches(t))
            .collect();
        out.sort_by(|a, b| {
            b.metadata
                .popularity
                .cmp(&a.metadata.popularity)
                .then_with(|| a.name.cmp(&b.name))
        });
        out
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }
}

fn read_template(path: &Path) -> anyhow::Result<Template> {
    let raw = std::fs::read_to_string(path).context("read failed")?;
    let template: Template = serde_json::from_str(&raw).context("invalid template JSON")?;
    anyhow::ensure!(!template.id.trim().is_empty(), "template id is empty");
    Ok(template)
}
