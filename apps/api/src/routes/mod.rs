pub mod health;
pub mod preview;
pub mod resumes;
pub mod templates;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Template catalog
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route("/api/v1/templates/:id", get(templates::handle_get_template))
        .route(
            "/api/v1/templates/:id/theme",
            post(templates::handle_apply_theme),
        )
        // Rendering
        .route("/api/v1/preview", post(preview::handle_preview))
        .route(
            "/api/v1/resumes/validate",
            post(resumes::handle_validate_resume),
        )
        .with_state(state)
}
