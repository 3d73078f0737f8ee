use crate::error::ExtractError;
use std::path::Path;

/// Text of one page, or the reason it could not be extracted.
pub type PageText = Result<String, ExtractError>;

/// Source of per-page PDF text.
///
/// `open` fails only when the whole document is unusable. Individual pages
/// report their own failures so a single bad page never drops the document.
pub trait PdfBackend {
    fn open(&self, path: &Path) -> Result<Vec<PageText>, ExtractError>;
}

/// Pure-Rust backend built on `lopdf`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfBackend;

impl PdfBackend for LopdfBackend {
    fn open(&self, path: &Path) -> Result<Vec<PageText>, ExtractError> {
        let doc = lopdf::Document::load(path).map_err(|e| ExtractError::Open {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        // get_pages is keyed by 1-based page number in document order
        let pages = doc
            .get_pages()
            .into_keys()
            .map(|page| {
                doc.extract_text(&[page])
                    .map_err(|e| ExtractError::Page { page, reason: e.to_string() })
            })
            .collect();
        Ok(pages)
    }
}
