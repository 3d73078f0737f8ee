//! Offline lexical retrieval over a folder of PDFs.
//!
//! Pages are split into overlapping passages, each passage is reduced to a
//! token set, and queries are ranked by summed inverse document frequency of
//! the tokens they share with a passage.

pub mod chunker;
pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod guard;
pub mod index;
pub mod pdf;
pub mod retrieve;
pub mod session;
pub mod tokenizer;

pub use config::{ChunkConfig, Settings};
pub use error::{ExtractError, ExtractWarning};
pub use index::{Passage, PassageIndex};
pub use pdf::{LopdfBackend, PdfBackend};
pub use retrieve::ScoredHit;
pub use session::{Corpus, KnowledgeBase, LoadReport};
