/// Substrings that mark a query as asking for a calculation.
pub const TRIGGER_WORDS: &[&str] = &["emi", "sip", "cagr", "xirr", "portfolio", "csv", "%", "years", "months"];

pub const DISCLAIMER: &str = "This bot does not calculate or analyze CSVs. I will search your PDFs instead.";

/// Whether the disclaimer must be shown before searching for `query`.
///
/// Plain case-insensitive substring match, so "premium" triggers on "emi".
pub fn needs_disclaimer(query: &str) -> bool {
    let q = query.to_lowercase();
    TRIGGER_WORDS.iter().any(|w| q.contains(w))
}
