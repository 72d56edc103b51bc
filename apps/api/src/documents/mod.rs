// Document I/O: text extraction from uploads, PDF/DOCX generation, and the
// holding areas both write into. Parsing and rendering are CPU-bound and run
// inside tokio::task::spawn_blocking.

pub mod extract;
pub mod generate;
pub mod handlers;
pub mod storage;

use std::path::Path;

/// Document formats the service can read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Detects the format from a path's extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}
