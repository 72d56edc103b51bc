use axum::{extract::State, Json};
use serde::Serialize;

use crate::auth::service::{login, signup, Credentials};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

/// POST /signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(request): Json<Credentials>,
) -> Result<Json<MessageResponse>, AppError> {
    signup(state.accounts.as_ref(), state.bcrypt_cost, request).await?;
    Ok(Json(MessageResponse {
        message: "Signup successful".to_string(),
    }))
}

/// POST /login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(request): Json<Credentials>,
) -> Result<Json<TokenResponse>, AppError> {
    let access_token = login(state.accounts.as_ref(), &state.tokens, request).await?;
    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}
