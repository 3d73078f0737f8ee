use crate::index::{Passage, PassageIndex};
use crate::tokenizer::tokenize;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredHit {
    pub score: f64,
    pub passage: Passage,
}

/// IDF-lite weight of a token: `ln(1 + N / (1 + df))`.
pub fn idf(index: &PassageIndex, token: &str) -> f64 {
    let n = index.num_passages as f64;
    (1.0 + n / (1.0 + index.df(token) as f64)).ln()
}

/// Sum of IDF weights over query tokens present in passage `i`.
///
/// Term frequency inside the passage is ignored; only membership counts.
/// Tokens are summed in sorted order.
pub fn score_passage(query_tokens: &BTreeSet<String>, i: usize, index: &PassageIndex) -> f64 {
    let Some(toks) = index.token_sets.get(i) else { return 0.0 };
    query_tokens.iter().filter(|t| toks.contains(*t)).map(|t| idf(index, t)).sum()
}

/// Rank `passages` against `query` and return at most `k` positive-score hits.
///
/// Equal scores keep their original passage order.
pub fn retrieve(query: &str, passages: &[Passage], index: &PassageIndex, k: usize) -> Vec<ScoredHit> {
    if passages.is_empty() || k == 0 {
        return Vec::new();
    }
    let q: BTreeSet<String> = tokenize(query).into_iter().collect();
    if q.is_empty() {
        return Vec::new();
    }

    let n = index.num_passages.min(passages.len());
    let mut scored: Vec<(f64, usize)> = (0..n).map(|i| (score_passage(&q, i, index), i)).collect();
    // stable: ties stay in ascending passage order
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    scored
        .into_iter()
        .filter(|(score, _)| *score > 0.0)
        .take(k)
        .map(|(score, i)| ScoredHit { score, passage: passages[i].clone() })
        .collect()
}
