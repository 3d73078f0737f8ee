use crate::config::Settings;
use crate::error::ExtractWarning;
use crate::extract::extract_passages;
use crate::index::{Passage, PassageIndex};
use crate::pdf::PdfBackend;
use crate::retrieve::{retrieve, ScoredHit};
use anyhow::Result;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Passages and the index built from them, always as a pair.
#[derive(Debug, Default)]
pub struct Corpus {
    passages: Vec<Passage>,
    index: PassageIndex,
}

impl Corpus {
    pub fn build(passages: Vec<Passage>) -> Self {
        let index = PassageIndex::build(&passages);
        Self { passages, index }
    }

    pub fn passages(&self) -> &[Passage] {
        &self.passages
    }

    pub fn index(&self) -> &PassageIndex {
        &self.index
    }

    pub fn search(&self, query: &str, k: usize) -> Vec<ScoredHit> {
        retrieve(query, &self.passages, &self.index, k)
    }
}

#[derive(Debug)]
pub struct LoadReport {
    pub documents: usize,
    pub passages: usize,
    pub skipped: Vec<ExtractWarning>,
    pub took: Duration,
}

/// The corpus loaded from the knowledge folder.
///
/// Reload builds a complete new [`Corpus`] before swapping it in, so readers
/// only ever see a matched pair.
pub struct KnowledgeBase<B> {
    settings: Settings,
    backend: B,
    corpus: RwLock<Arc<Corpus>>,
}

impl<B: PdfBackend> KnowledgeBase<B> {
    pub fn open(settings: Settings, backend: B) -> Result<(Self, LoadReport)> {
        let kb = Self { settings, backend, corpus: RwLock::new(Arc::new(Corpus::default())) };
        let report = kb.reload()?;
        Ok((kb, report))
    }

    /// Re-read the folder and replace the corpus. On error the old corpus stays.
    pub fn reload(&self) -> Result<LoadReport> {
        let start = Instant::now();
        let extraction = extract_passages(&self.settings.folder, &self.backend, &self.settings.chunk)?;
        let corpus = Arc::new(Corpus::build(extraction.passages));
        let report = LoadReport {
            documents: extraction.documents,
            passages: corpus.passages().len(),
            skipped: extraction.warnings,
            took: start.elapsed(),
        };
        *self.corpus.write() = corpus;
        tracing::info!(
            folder = %self.settings.folder.display(),
            documents = report.documents,
            passages = report.passages,
            skipped = report.skipped.len(),
            took_s = report.took.as_secs_f64(),
            "knowledge base loaded"
        );
        Ok(report)
    }

    /// Current corpus; stays valid even if a reload swaps in a new one.
    pub fn snapshot(&self) -> Arc<Corpus> {
        Arc::clone(&self.corpus.read())
    }

    pub fn search(&self, query: &str, k: usize) -> Vec<ScoredHit> {
        self.snapshot().search(query, k)
    }

    pub fn passage_count(&self) -> usize {
        self.corpus.read().passages().len()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
