use tracing::info;

use crate::analysis::prompts::{build_enhance_prompt, RESUME_WRITER_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// Rewrites resume text for a target role. The model's reply is returned as-is.
pub async fn enhance_resume(
    llm: &LlmClient,
    resume_text: &str,
    target_role: &str,
) -> Result<String, AppError> {
    let prompt = build_enhance_prompt(resume_text, target_role);
    let enhanced = llm.call_text(&prompt, RESUME_WRITER_SYSTEM).await?;

    info!(
        input_chars = resume_text.chars().count(),
        output_chars = enhanced.chars().count(),
        "resume enhanced"
    );
    Ok(enhanced)
}
