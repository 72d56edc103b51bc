//! Axum route handlers for upload and document generation.

use std::path::PathBuf;

use anyhow::Context;
use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::documents::extract::{extract_text, preview};
use crate::documents::generate::{write_docx, write_pdf};
use crate::documents::DocumentFormat;
use crate::errors::{run_blocking, AppError};
use crate::state::AppState;

/// Upload responses carry at most this many characters of extracted text.
const PREVIEW_CHARS: usize = 2000;

/// Multipart field holding the uploaded document.
const FILE_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// The client's original filename, echoed back. Not used for storage.
    pub filename: String,
    pub extracted_text: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct PdfResponse {
    pub pdf_file: String,
}

#[derive(Debug, Serialize)]
pub struct DocxResponse {
    pub docx_file: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /upload
///
/// Stores the `file` field under a fresh name and returns a preview of its text.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        let path = state.holding.upload_path(&filename);
        tokio::fs::write(&path, &data)
            .await
            .with_context(|| format!("Failed to store upload at '{}'", path.display()))?;
        info!(
            filename = %filename,
            stored_as = %path.display(),
            bytes = data.len(),
            "upload stored"
        );

        let text = run_blocking("text extraction", move || extract_text(&path)).await?;

        return Ok(Json(UploadResponse {
            filename,
            extracted_text: preview(&text, PREVIEW_CHARS),
        }));
    }

    Err(AppError::Validation(format!(
        "Multipart field '{FILE_FIELD}' is required"
    )))
}

/// POST /generate-pdf
pub async fn handle_generate_pdf(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<PdfResponse>, AppError> {
    let path = generate(&state, DocumentFormat::Pdf, request.resume_text).await?;
    Ok(Json(PdfResponse {
        pdf_file: path.to_string_lossy().into_owned(),
    }))
}

/// POST /generate-docx
pub async fn handle_generate_docx(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<DocxResponse>, AppError> {
    let path = generate(&state, DocumentFormat::Docx, request.resume_text).await?;
    Ok(Json(DocxResponse {
        docx_file: path.to_string_lossy().into_owned(),
    }))
}

async fn generate(
    state: &AppState,
    format: DocumentFormat,
    text: String,
) -> Result<PathBuf, AppError> {
    let path = state.holding.generated_path(format);
    let target = path.clone();

    run_blocking("document generation", move || match format {
        DocumentFormat::Pdf => write_pdf(&text, &target),
        DocumentFormat::Docx => write_docx(&text, &target),
    })
    .await?;

    info!(path = %path.display(), format = format.extension(), "document generated");
    Ok(path)
}
