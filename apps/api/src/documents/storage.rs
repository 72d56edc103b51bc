use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;
use uuid::Uuid;

use crate::documents::DocumentFormat;

/// Server-local directories for transient files. Nothing here is ever deleted.
#[derive(Debug, Clone)]
pub struct HoldingAreas {
    pub uploads: PathBuf,
    pub generated: PathBuf,
}

impl HoldingAreas {
    pub fn new(uploads: impl Into<PathBuf>, generated: impl Into<PathBuf>) -> Self {
        Self {
            uploads: uploads.into(),
            generated: generated.into(),
        }
    }

    /// Creates both directories if they do not exist.
    pub async fn ensure(&self) -> Result<()> {
        for dir in [&self.uploads, &self.generated] {
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("Cannot create holding area '{}'", dir.display()))?;
        }
        info!(
            uploads = %self.uploads.display(),
            generated = %self.generated.display(),
            "Holding areas ready"
        );
        Ok(())
    }

    /// Fresh path for an upload. The client's filename only contributes its extension.
    pub fn upload_path(&self, original_filename: &str) -> PathBuf {
        self.uploads.join(upload_storage_key(original_filename))
    }

    /// Fresh path for a generated document.
    pub fn generated_path(&self, format: DocumentFormat) -> PathBuf {
        self.generated
            .join(format!("{}.{}", Uuid::new_v4(), format.extension()))
    }
}

/// `<uuid>` plus the lower-cased original extension when it is plain alphanumeric.
fn upload_storage_key(original_filename: &str) -> String {
    let ext = Path::new(original_filename)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|e| e.to_ascii_lowercase());

    match ext {
        Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
        None => Uuid::new_v4().to_string(),
    }
}
