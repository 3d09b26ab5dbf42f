//! Edit distance and similarity between answers.

use crate::normalize::strip_accents;

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows of the (m + 1) x (n + 1) table are enough
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            curr[j] = if a_chars[i - 1] == b_chars[j - 1] {
                prev[j - 1]
            } else {
                1 + prev[j - 1] // substitution
                    .min(curr[j - 1]) // insertion
                    .min(prev[j]) // deletion
            };
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Similarity between 0.0 and 1.0, ignoring case, accents and outer whitespace.
///
/// Used for "almost there" hints rather than for grading.
pub fn similarity(a: &str, b: &str) -> f64 {
    let clean = |s: &str| strip_accents(&s.trim().to_lowercase());
    let a = clean(a);
    let b = clean(b);

    let longer = a.chars().count().max(b.chars().count());
    if longer == 0 {
        return 1.0;
    }

    let distance = levenshtein(&a, &b);
    (longer - distance) as f64 / longer as f64
}
