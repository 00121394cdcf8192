use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::catalog::TemplateFilter;
use crate::errors::AppError;
use crate::models::template::{Template, TemplateCustomizations};
use crate::state::AppState;
use crate::theme::{apply_customizations, AppliedTheme};

/// GET /api/v1/templates
pub async fn handle_list_templates(
    State(state): State<AppState>,
    Query(filter): Query<TemplateFilter>,
) -> Json<Vec<Template>> {
    Json(state.catalog.list(&filter).into_iter().cloned().collect())
}

/// GET /api/v1/templates/:id
pub async fn handle_get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Template>, AppError> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Template '{id}' does not exist")))
}

/// POST /api/v1/templates/:id/theme
/// Resolves the theme a preview would use. Override groups the template locks are ignored.
pub async fn handle_apply_theme(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(customizations): Json<TemplateCustomizations>,
) -> Result<Json<AppliedTheme>, AppError> {
    let template = state
        .catalog
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Template '{id}' does not exist")))?;
    let permitted = customizations.permitted_by(template);
    Ok(Json(apply_customizations(template, Some(&permitted))))
}
