//! Text normalization applied before answers are compared.

use unicode_normalization::UnicodeNormalization;

/// Punctuation removed from answers before comparison.
const STRIPPED_PUNCTUATION: [char; 5] = [',', ';', '.', '!', '?'];

/// Lowercase, strip punctuation and collapse whitespace.
pub fn normalize(text: &str) -> String {
    normalize_with(text, false)
}

/// Normalize, keeping the original case when `case_sensitive` is set.
pub fn normalize_with(text: &str, case_sensitive: bool) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect();

    let cased = if case_sensitive {
        stripped
    } else {
        stripped.to_lowercase()
    };

    collapse_whitespace(&cased)
}

/// Trim and collapse runs of whitespace into single spaces.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split `text` on any of `separators` and on the whole words in `words`.
///
/// A separator word needs whitespace on both sides: between two words of a
/// chunk, at the start of a chunk following a separator character ("eggs, and
/// toast"), or at the end of one preceding it. Pieces are whitespace-collapsed
/// and empty pieces are dropped.
pub fn split_alternatives(text: &str, separators: &[char], words: &[&str]) -> Vec<String> {
    let chunks: Vec<&str> = text.split(|c: char| separators.contains(&c)).collect();
    let mut pieces = Vec::new();

    for (chunk_idx, chunk) in chunks.iter().enumerate() {
        let tokens: Vec<&str> = chunk.split_whitespace().collect();
        let leading = chunk_idx > 0 && chunk.starts_with(char::is_whitespace);
        let trailing = chunk_idx + 1 < chunks.len() && chunk.ends_with(char::is_whitespace);
        let mut current: Vec<&str> = Vec::new();

        for (idx, token) in tokens.iter().enumerate() {
            let is_first = idx == 0;
            let is_last = idx + 1 == tokens.len();
            let splits = tokens.len() > 1
                && match (is_first, is_last) {
                    (false, false) => true,
                    (true, _) => leading,
                    (_, true) => trailing,
                };

            if splits && words.iter().any(|w| token.eq_ignore_ascii_case(w)) {
                if !current.is_empty() {
                    pieces.push(current.join(" "));
                }
                current.clear();
            } else {
                current.push(token);
            }
        }

        if !current.is_empty() {
            pieces.push(current.join(" "));
        }
    }

    pieces
}

/// Remove combining diacritical marks after NFD decomposition (`café` -> `cafe`).
pub fn strip_accents(text: &str) -> String {
    text.nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect()
}
