use axum::{extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::{NewResume, ResumeRow};
use crate::state::AppState;

/// POST /resume
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Json(request): Json<NewResume>,
) -> Result<Json<ResumeRow>, AppError> {
    let row = state.resumes.insert(&request).await?;
    info!(resume_id = row.id, "resume stored");
    Ok(Json(row))
}

/// GET /resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    Ok(Json(state.resumes.list().await?))
}
