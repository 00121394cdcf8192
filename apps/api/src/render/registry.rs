use tracing::debug;

use crate::models::resume::Resume;
use crate::models::template::{Template, TemplateCustomizations};
use crate::render::document::{render_document, EntryFormatter, RenderOptions, RenderedDocument};
use crate::render::templates::{
    ClassicFormatter, CreativeFormatter, ExecutiveFormatter, ModernFormatter, TechnicalFormatter,
};

pub const CLASSIC_PROFESSIONAL: &str = "classic-professional";
pub const MODERN_MINIMAL: &str = "modern-minimal";
pub const EXECUTIVE_ELITE: &str = "executive-elite";
pub const TECHNICAL_DEVELOPER: &str = "technical-developer";
pub const CREATIVE_PORTFOLIO: &str = "creative-portfolio";

/// A template id bound to its entry formatter.
pub struct Renderer {
    pub id: &'static str,
    formatter: &'static dyn EntryFormatter,
}

impl Renderer {
    pub fn render(
        &self,
        resume: Option<&Resume>,
        template: Option<&Template>,
        customizations: Option<&TemplateCustomizations>,
        options: RenderOptions,
    ) -> RenderedDocument {
        render_document(self.id, self.formatter, resume, template, customizations, options)
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer").field("id", &self.id).finish()
    }
}

// Index 0 is the fallback.
static RENDERERS: [Renderer; 5] = [
    Renderer {
        id: CLASSIC_PROFESSIONAL,
        formatter: &ClassicFormatter,
    },
    Renderer {
        id: MODERN_MINIMAL,
        formatter: &ModernFormatter,
    },
    Renderer {
        id: EXECUTIVE_ELITE,
        formatter: &ExecutiveFormatter,
    },
    Renderer {
        id: TECHNICAL_DEVELOPER,
        formatter: &TechnicalFormatter,
    },
    Renderer {
        id: CREATIVE_PORTFOLIO,
        formatter: &CreativeFormatter,
    },
];

/// Renderer registered for `template_id`, or the classic renderer when the id is unknown.
pub fn get_template_renderer(template_id: &str) -> &'static Renderer {
    RENDERERS
        .iter()
        .find(|r| r.id == template_id)
        .unwrap_or_else(|| {
            debug!(template_id, "No renderer registered, using {CLASSIC_PROFESSIONAL}");
            &RENDERERS[0]
        })
}

pub fn registered_ids() -> impl Iterator<Item = &'static str> {
    RENDERERS.iter().map(|r| r.id)
}
