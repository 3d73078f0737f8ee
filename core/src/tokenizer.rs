use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref RE: Regex = Regex::new(r"[a-z0-9]+").expect("valid regex");
}

/// Tokenize text into lowercase runs of ASCII letters and digits.
///
/// Everything else (punctuation, whitespace, non-ASCII) acts as a separator.
/// No stemming and no stopword removal.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    RE.find_iter(&lowered).map(|m| m.as_str().to_string()).collect()
}

/// Distinct tokens of `text`.
pub fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        assert_eq!(tokenize("SIP-2024, 12%!"), vec!["sip", "2024", "12"]);
    }

    #[test]
    fn empty_and_symbol_only_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  --- %%% ...").is_empty());
    }

    #[test]
    fn set_drops_duplicates() {
        let s = token_set("Tax tax TAX audit");
        assert_eq!(s.len(), 2);
        assert!(s.contains("tax"));
        assert!(s.contains("audit"));
    }
}
