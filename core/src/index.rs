use crate::tokenizer::token_set;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A chunk of page text tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    /// File name of the originating document
    pub source: String,
    /// 1-based page number
    pub page: u32,
    /// Trimmed, non-empty chunk text
    pub text: String,
}

/// Token sets and document frequencies for a passage collection.
///
/// `token_sets[i]` describes `passages[i]` of the slice the index was built
/// from; it is meaningless against any other collection.
#[derive(Debug, Default, Clone)]
pub struct PassageIndex {
    pub token_sets: Vec<HashSet<String>>,
    pub df: HashMap<String, u32>,
    pub num_passages: usize,
}

impl PassageIndex {
    pub fn build(passages: &[Passage]) -> Self {
        let mut token_sets = Vec::with_capacity(passages.len());
        let mut df: HashMap<String, u32> = HashMap::new();
        for p in passages {
            let toks = token_set(&p.text);
            for t in &toks {
                *df.entry(t.clone()).or_insert(0) += 1;
            }
            token_sets.push(toks);
        }
        Self { token_sets, df, num_passages: passages.len() }
    }

    pub fn df(&self, token: &str) -> u32 {
        self.df.get(token).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.num_passages
    }

    pub fn is_empty(&self) -> bool {
        self.num_passages == 0
    }
}
