use crate::chunker::chunk;
use crate::config::ChunkConfig;
use crate::error::{ExtractError, ExtractWarning};
use crate::pdf::PdfBackend;
use crate::Passage;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Passages from every readable document plus the documents that were skipped.
#[derive(Debug, Default)]
pub struct Extraction {
    pub passages: Vec<Passage>,
    pub documents: usize,
    pub warnings: Vec<ExtractWarning>,
}

/// Case-insensitive `.pdf` suffix check on a file name.
pub fn is_pdf_name(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".pdf")
}

/// PDF files directly inside `folder`, sorted by file name.
///
/// An entry that cannot be inspected (dangling symlink, no permission) is
/// still returned when its name looks like a PDF, so opening it fails and the
/// document is skipped with a warning. Only failing to read `folder` itself
/// is an error.
pub fn list_pdfs(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkDir::new(folder).min_depth(1).max_depth(1).follow_links(true).sort_by_file_name();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() > 0 => {
                match err.path() {
                    Some(path) if path.file_name().and_then(|n| n.to_str()).is_some_and(is_pdf_name) => {
                        files.push(path.to_path_buf());
                    }
                    _ => tracing::debug!(error = %err, "ignoring unreadable folder entry"),
                }
                continue;
            }
            Err(err) => return Err(err).with_context(|| format!("listing {}", folder.display())),
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_str().is_some_and(is_pdf_name) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Read every PDF in `folder` and split its pages into passages.
///
/// A missing folder is created and yields an empty extraction. Documents the
/// backend cannot open are skipped with a warning; pages that fail to extract
/// count as empty. Only failing to create or list the folder is an error.
pub fn extract_passages<B: PdfBackend + ?Sized>(folder: &Path, backend: &B, config: &ChunkConfig) -> Result<Extraction> {
    let mut out = Extraction::default();
    if !folder.is_dir() {
        fs::create_dir_all(folder).with_context(|| format!("creating {}", folder.display()))?;
        tracing::info!(folder = %folder.display(), "created empty knowledge folder");
        return Ok(out);
    }

    for path in list_pdfs(folder)? {
        let pages = match backend.open(&path) {
            Ok(pages) => pages,
            Err(err) => {
                let reason = match err {
                    ExtractError::Open { reason, .. } => reason,
                    other => other.to_string(),
                };
                tracing::warn!(path = %path.display(), %reason, "skipping unreadable document");
                out.warnings.push(ExtractWarning { path, reason });
                continue;
            }
        };

        let source = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let before = out.passages.len();
        for (i, page) in pages.into_iter().enumerate() {
            let text = page.unwrap_or_else(|err| {
                tracing::debug!(source = %source, %err, "treating page as empty");
                String::new()
            });
            for piece in chunk(&text, config) {
                let trimmed = piece.trim();
                if trimmed.is_empty() {
                    continue;
                }
                out.passages.push(Passage { source: source.clone(), page: i as u32 + 1, text: trimmed.to_string() });
            }
        }
        out.documents += 1;
        tracing::debug!(source = %source, passages = out.passages.len() - before, "extracted document");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    struct FakePdfs(HashMap<String, Result<Vec<Result<String, ExtractError>>, ExtractError>>);

    impl PdfBackend for FakePdfs {
        fn open(&self, path: &Path) -> Result<Vec<Result<String, ExtractError>>, ExtractError> {
            let name = path.file_name().unwrap().to_string_lossy().to_string();
            self.0.get(&name).cloned().unwrap_or_else(|| {
                Err(ExtractError::Open { path: path.to_path_buf(), reason: "unknown".into() })
            })
        }
    }

    #[test]
    fn pdf_names_match_case_insensitively() {
        assert!(is_pdf_name("report.pdf"));
        assert!(is_pdf_name("REPORT.PDF"));
        assert!(is_pdf_name("a.Pdf"));
        assert!(!is_pdf_name("notes.txt"));
        assert!(!is_pdf_name("pdf"));
    }

    #[test]
    fn missing_folder_is_created() {
        let dir = tempdir().unwrap();
        let folder = dir.path().join("data").join("knowledge");
        let out = extract_passages(&folder, &FakePdfs(HashMap::new()), &ChunkConfig::default()).unwrap();
        assert!(out.passages.is_empty());
        assert!(out.warnings.is_empty());
        assert!(folder.is_dir());
    }

    #[test]
    fn bad_pages_are_empty_and_bad_documents_are_skipped() {
        let dir = tempdir().unwrap();
        for name in ["a.pdf", "b.PDF", "broken.pdf", "notes.txt"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("nested.pdf")).unwrap();

        let mut docs = HashMap::new();
        docs.insert(
            "a.pdf".to_string(),
            Ok(vec![
                Ok("first page".to_string()),
                Err(ExtractError::Page { page: 2, reason: "bad font".into() }),
                Ok("   ".to_string()),
                Ok("fourth\npage".to_string()),
            ]),
        );
        docs.insert("b.PDF".to_string(), Ok(vec![Ok("other doc".to_string())]));
        docs.insert(
            "broken.pdf".to_string(),
            Err(ExtractError::Open { path: dir.path().join("broken.pdf"), reason: "corrupt xref".into() }),
        );

        let out = extract_passages(dir.path(), &FakePdfs(docs), &ChunkConfig::default()).unwrap();
        let got: Vec<(&str, u32, &str)> =
            out.passages.iter().map(|p| (p.source.as_str(), p.page, p.text.as_str())).collect();
        assert_eq!(got, vec![("a.pdf", 1, "first page"), ("a.pdf", 4, "fourth page"), ("b.PDF", 1, "other doc")]);
        assert_eq!(out.documents, 2);
        assert_eq!(out.warnings.len(), 1);
        assert_eq!(out.warnings[0].path, dir.path().join("broken.pdf"));
        assert_eq!(out.warnings[0].reason, "corrupt xref");
    }

    #[test]
    fn long_pages_become_several_passages() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("long.pdf"), b"").unwrap();
        let mut docs = HashMap::new();
        docs.insert("long.pdf".to_string(), Ok(vec![Ok("word ".repeat(400))]));
        let out = extract_passages(dir.path(), &FakePdfs(docs), &ChunkConfig::default()).unwrap();
        // 400 * 5 - 1 = 1999 chars after trimming: windows at 0, 700, 1400
        assert_eq!(out.passages.len(), 3);
        assert!(out.passages.iter().all(|p| p.page == 1 && !p.text.is_empty()));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_pdf_link_is_listed_and_other_links_ignored() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("good.pdf"), b"").unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.pdf"), dir.path().join("link.pdf")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.txt"), dir.path().join("link.txt")).unwrap();

        let files = list_pdfs(dir.path()).unwrap();
        assert_eq!(files, vec![dir.path().join("good.pdf"), dir.path().join("link.pdf")]);
    }

    #[test]
    fn unreadable_folder_is_an_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.pdf");
        fs::write(&file, b"").unwrap();
        assert!(list_pdfs(&file.join("inner")).is_err());
    }
}
