//! Error types for PDF text acquisition.

use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by a [`PdfBackend`](crate::pdf::PdfBackend).
#[derive(Debug, Clone, Error)]
pub enum ExtractError {
    /// The whole document could not be opened or parsed
    #[error("failed to read {}: {reason}", .path.display())]
    Open { path: PathBuf, reason: String },
    /// Text extraction failed for a single page
    #[error("failed to extract text from page {page}: {reason}")]
    Page { page: u32, reason: String },
}

/// A document skipped during extraction, surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[warn] Failed to read {}: {reason}", .path.display())]
pub struct ExtractWarning {
    pub path: PathBuf,
    pub reason: String,
}
