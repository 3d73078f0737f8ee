use crate::retrieve::ScoredHit;

pub const SNIPPET_CHARS: usize = 400;

pub const NO_MATCHES: &str =
    "No matching content found in your PDFs. Try different keywords, or add more PDFs to the knowledge folder.";

/// One display line for a hit: `"{ordinal}. ({source} • p.{page}) {snippet}"`.
pub fn format_hit(hit: &ScoredHit, ordinal: usize) -> String {
    let p = &hit.passage;
    let flat = p.text.replace('\n', " ");
    let flat = flat.trim();
    let snippet = match flat.char_indices().nth(SNIPPET_CHARS) {
        Some((cut, _)) => format!("{}...", &flat[..cut]),
        None => flat.to_string(),
    };
    format!("{ordinal}. ({} • p.{}) {snippet}", p.source, p.page)
}

/// The block printed for a query: a header plus one numbered line per hit.
pub fn format_results(hits: &[ScoredHit]) -> String {
    if hits.is_empty() {
        return NO_MATCHES.to_string();
    }
    let mut out = String::from("Matches from your PDFs:");
    for (i, hit) in hits.iter().enumerate() {
        out.push('\n');
        out.push_str(&format_hit(hit, i + 1));
    }
    out
}
