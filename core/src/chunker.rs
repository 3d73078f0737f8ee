use crate::config::ChunkConfig;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WS: Regex = Regex::new(r"\s+").expect("valid regex");
}

/// Collapse whitespace runs to a single space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    WS.replace_all(text, " ").trim().to_string()
}

/// Split text into overlapping character windows.
///
/// Windows are `size` characters long (the last one may be shorter) and start
/// every `size - overlap` characters. Production stops after the first window
/// that reaches the end of the normalized text, so a page of `size` characters
/// or fewer is one passage. A plain `start < len` loop would also emit a tail
/// window already contained in the previous one, which inflates the passage
/// count and document frequencies that scoring depends on.
pub fn chunk(text: &str, config: &ChunkConfig) -> Vec<String> {
    let normalized = normalize_whitespace(text);
    if normalized.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = normalized.chars().collect();
    let len = chars.len();
    let size = config.window();
    let step = config.step();

    let mut out = Vec::with_capacity(len / step + 1);
    let mut start = 0;
    while start < len {
        let end = (start + size).min(len);
        out.push(chars[start..end].iter().collect());
        if end == len {
            break;
        }
        start += step;
    }
    out
}
