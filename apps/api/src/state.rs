use std::sync::Arc;

use crate::auth::store::AccountStore;
use crate::auth::token::TokenIssuer;
use crate::documents::storage::HoldingAreas;
use crate::llm_client::LlmClient;
use crate::resumes::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after construction.
#[derive(Clone)]
pub struct AppState {
    pub resumes: Arc<dyn ResumeStore>,
    pub accounts: Arc<dyn AccountStore>,
    /// The single injected client for the text-generation service.
    pub llm: LlmClient,
    pub tokens: TokenIssuer,
    pub holding: HoldingAreas,
    pub bcrypt_cost: u32,
}
