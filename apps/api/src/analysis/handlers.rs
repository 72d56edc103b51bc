//! Axum route handlers for scoring and enhancement.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::ats::{score_resume, AtsScore};
use crate::analysis::enhancer::enhance_resume;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AtsScoreRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub target_role: String,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub enhanced_resume: String,
}

/// POST /ats-score
pub async fn handle_ats_score(Json(request): Json<AtsScoreRequest>) -> Json<AtsScore> {
    Json(score_resume(&request.resume_text, &request.job_keywords))
}

/// POST /ai-enhance
pub async fn handle_enhance(
    State(state): State<AppState>,
    Json(request): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let enhanced_resume =
        enhance_resume(&state.llm, &request.resume_text, &request.target_role).await?;
    Ok(Json(EnhanceResponse { enhanced_resume }))
}
