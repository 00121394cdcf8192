use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::models::template::TemplateCustomizations;
use crate::render::{get_template_renderer, RenderOptions, RenderedDocument, CLASSIC_PROFESSIONAL};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub resume: Option<Resume>,
    pub template_id: String,
    pub customizations: Option<TemplateCustomizations>,
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default)]
    pub print_mode: bool,
}

fn default_scale() -> f32 {
    1.0
}

/// POST /api/v1/preview
///
/// Render failures never surface as HTTP errors: a missing résumé comes back
/// as a placeholder document, and an unknown id falls back to the classic template.
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(req): Json<PreviewRequest>,
) -> Result<Json<RenderedDocument>, AppError> {
    let template_id = req.template_id.trim();
    if template_id.is_empty() {
        return Err(AppError::Validation("templateId must not be blank".to_string()));
    }

    // Unknown ids render exactly like the default template; the placeholder is
    // left for a catalog that lacks even that.
    let template = state.catalog.get(template_id).or_else(|| {
        debug!(template_id, "Template not in catalog, using {CLASSIC_PROFESSIONAL}");
        state.catalog.get(CLASSIC_PROFESSIONAL)
    });
    let customizations = match (template, &req.customizations) {
        (Some(t), Some(c)) => Some(c.permitted_by(t)),
        _ => None,
    };

    let renderer = get_template_renderer(template_id);
    debug!(template_id, renderer = renderer.id, "Rendering preview");

    let document = renderer.render(
        req.resume.as_ref(),
        template,
        customizations.as_ref(),
        RenderOptions {
            scale: req.scale,
            print_mode: req.print_mode,
        },
    );
    Ok(Json(document))
}
