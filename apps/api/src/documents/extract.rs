//! Text extraction for uploaded resumes, dispatched on the file extension.
//!
//! Unsupported extensions yield empty text rather than an error. A file that
//! claims a supported format but cannot be parsed is an `AppError::Extraction`.

use std::path::Path;

use anyhow::Context;
use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};
use lopdf::Document;
use tracing::debug;

use crate::documents::DocumentFormat;
use crate::errors::AppError;

/// Extracts the text of the document at `path`.
pub fn extract_text(path: &Path) -> Result<String, AppError> {
    match DocumentFormat::from_path(path) {
        Some(DocumentFormat::Pdf) => extract_pdf_text(path),
        Some(DocumentFormat::Docx) => extract_docx_text(path),
        None => {
            debug!(path = %path.display(), "unsupported format, no text extracted");
            Ok(String::new())
        }
    }
}

/// Page texts concatenated in page order with no separator. A page whose text
/// cannot be extracted contributes nothing.
fn extract_pdf_text(path: &Path) -> Result<String, AppError> {
    let doc = Document::load(path).map_err(|e| {
        AppError::Extraction(format!("Cannot open PDF '{}': {e}", path.display()))
    })?;

    let mut text = String::new();
    for page_number in doc.get_pages().keys() {
        match doc.extract_text(&[*page_number]) {
            // lopdf ends every text object with '\n'; pages join with no separator.
            Ok(page_text) => text.push_str(page_text.strip_suffix('\n').unwrap_or(&page_text)),
            Err(e) => debug!(page = page_number, "no extractable text on page: {e}"),
        }
    }
    Ok(text)
}

/// Paragraph texts joined with `\n`, empty paragraphs included.
fn extract_docx_text(path: &Path) -> Result<String, AppError> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Cannot read '{}'", path.display()))?;

    let docx = read_docx(&bytes).map_err(|e| {
        AppError::Extraction(format!("Cannot parse DOCX '{}': {e:?}", path.display()))
    })?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(paragraph_text(p)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    RunChild::Break(_) => text.push('\n'),
                    _ => {}
                }
            }
        }
    }
    text
}

/// First `max_chars` characters of `text`, never splitting a code point.
pub fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
