use axum::Json;

use crate::models::resume::Resume;
use crate::validation::{validate_resume, ValidationReport};

/// POST /api/v1/resumes/validate
pub async fn handle_validate_resume(Json(resume): Json<Resume>) -> Json<ValidationReport> {
    Json(validate_resume(&resume))
}
