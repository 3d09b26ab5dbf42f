//! Token-set answer matching with typo and plural tolerance.
//!
//! A student answer is compared against every accepted alternative. When no
//! alternative matches exactly, both sides are split into word tokens and each
//! required token is looked up among the student's tokens. The ratio of
//! required tokens found decides between full marks, partial credit and a miss.
//!
//! Tokens from all alternatives are pooled into a single required list, so
//! listing several synonyms makes every synonym's words required.

use crate::distance::levenshtein;
use crate::normalize::normalize_with;
use crate::types::{ExpectedAnswer, MatchOptions, MatchResult};

/// Match ratio at or above which partial credit is awarded.
pub const PARTIAL_CREDIT_THRESHOLD: f64 = 0.7;

/// Maximum edit distance (and length difference) accepted as a typo.
pub const TYPO_TOLERANCE: usize = 1;

/// Words that never count as required terms.
const IGNORED_WORDS: [&str; 4] = ["and", "a", "an", "the"];

/// Check a student's answer against the expected answer(s).
pub fn is_answer_correct(
    student_answer: &str,
    expected: &ExpectedAnswer,
    options: &MatchOptions,
) -> MatchResult {
    let student = normalize_with(student_answer, options.case_sensitive);
    let accepted: Vec<String> = expected
        .alternatives()
        .iter()
        .map(|alt| normalize_with(alt, options.case_sensitive))
        .collect();

    if accepted.iter().any(|alt| *alt == student) {
        return MatchResult::correct();
    }

    if options.strict_mode {
        return MatchResult::incorrect();
    }

    let student_tokens = tokenize(&student);
    let required: Vec<&str> = accepted.iter().flat_map(|alt| tokenize(alt)).collect();

    let (matched, missing): (Vec<&str>, Vec<&str>) = required
        .iter()
        .copied()
        .partition(|req| student_tokens.iter().any(|s| tokens_match(s, req)));

    let match_percentage = if required.is_empty() {
        0.0
    } else {
        matched.len() as f64 / required.len() as f64
    };

    if match_percentage >= 1.0 {
        return MatchResult {
            is_correct: true,
            partial_credit: None,
            explanation: Some("All required terms present".to_string()),
        };
    }

    if options.allow_partial_credit && match_percentage >= PARTIAL_CREDIT_THRESHOLD {
        return MatchResult {
            is_correct: false,
            partial_credit: Some(match_percentage),
            explanation: Some(format!(
                "Matched {} of {} required terms. Missing: {}",
                matched.len(),
                required.len(),
                missing.join(", ")
            )),
        };
    }

    let alternatives = expected
        .alternatives()
        .iter()
        .map(|alt| alt.trim())
        .collect::<Vec<_>>()
        .join(" or ");

    MatchResult {
        is_correct: false,
        partial_credit: None,
        explanation: Some(format!(
            "Expected: {} ({}/{} terms matched)",
            alternatives,
            matched.len(),
            required.len()
        )),
    }
}

/// Split a normalized answer into word tokens, dropping articles and "and".
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|token| !token.is_empty())
        .filter(|token| !IGNORED_WORDS.iter().any(|w| token.eq_ignore_ascii_case(w)))
        .collect()
}

/// Whether a student token satisfies a required token.
pub fn tokens_match(student: &str, required: &str) -> bool {
    if student == required {
        return true;
    }

    if is_suffixed(student, required, "s") || is_suffixed(student, required, "es") {
        return true;
    }

    let student_len = student.chars().count();
    let required_len = required.chars().count();
    student_len.abs_diff(required_len) <= TYPO_TOLERANCE
        && levenshtein(student, required) <= TYPO_TOLERANCE
}

/// Either word equals the other with `suffix` appended.
fn is_suffixed(a: &str, b: &str, suffix: &str) -> bool {
    a.strip_suffix(suffix) == Some(b) || b.strip_suffix(suffix) == Some(a)
}
