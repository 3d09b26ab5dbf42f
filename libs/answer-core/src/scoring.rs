//! Turning match results into points.

use crate::matcher::{is_answer_correct, PARTIAL_CREDIT_THRESHOLD};
use crate::normalize::{collapse_whitespace, split_alternatives};
use crate::types::{ExpectedAnswer, GradeResult, MatchOptions};

/// Feedback used when the matcher gives no explanation (exact matches).
pub const DEFAULT_FEEDBACK: &str = "Answer graded";

/// Grade a free-text answer worth `max_points`, with partial credit.
pub fn regrade_question(
    student_answer: &str,
    expected: &ExpectedAnswer,
    max_points: f64,
) -> GradeResult {
    let options = MatchOptions {
        allow_partial_credit: true,
        strict_mode: false,
        ..MatchOptions::default()
    };
    let result = is_answer_correct(student_answer, expected, &options);

    let score = if result.is_correct {
        max_points
    } else {
        match result.partial_credit {
            Some(credit) if credit > 0.0 => round_to_tenth(max_points * credit),
            _ => 0.0,
        }
    };

    GradeResult {
        score,
        is_correct: result.is_correct,
        feedback: result
            .explanation
            .unwrap_or_else(|| DEFAULT_FEEDBACK.to_string()),
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Whole points for an answer made of several parts (e.g. "name two things").
///
/// A fully correct answer gets every point. Otherwise, for questions worth
/// more than one point, each expected part found in the student's parts earns
/// its share of the points, rounded to the nearest whole point.
pub fn multi_part_credit(student: &ExpectedAnswer, expected: &ExpectedAnswer, points: u32) -> u32 {
    let joined = student.alternatives().join(", ");
    if is_answer_correct(&joined, expected, &MatchOptions::default()).is_correct {
        return points;
    }

    if points <= 1 {
        return 0;
    }

    let student_parts: Vec<String> = match student {
        ExpectedAnswer::Many(items) => items
            .iter()
            .filter(|item| !item.trim().is_empty())
            .map(|item| normalize_part(item))
            .collect(),
        ExpectedAnswer::One(text) if text.trim().is_empty() => Vec::new(),
        ExpectedAnswer::One(text) => split_parts(text),
    };

    let expected_parts: Vec<String> = match expected {
        ExpectedAnswer::Many(items) => items.iter().map(|item| normalize_part(item)).collect(),
        ExpectedAnswer::One(text) => split_parts(text),
    };

    if expected_parts.len() <= 1 || student_parts.is_empty() {
        return 0;
    }

    let matched = expected_parts
        .iter()
        .filter(|part| student_parts.iter().any(|s| parts_match(s, part)))
        .count();

    (matched as f64 / expected_parts.len() as f64 * points as f64).round() as u32
}

/// Split a single answer into normalized parts; a single part stays whole.
fn split_parts(text: &str) -> Vec<String> {
    let parts: Vec<String> = split_alternatives(text, &[',', ';'], &["and", "or"])
        .iter()
        .map(|part| normalize_part(part))
        .filter(|part| !part.is_empty())
        .collect();

    if parts.len() > 1 {
        parts
    } else {
        vec![normalize_part(text)]
    }
}

fn normalize_part(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | '\'' | '"' | '(' | ')'))
        .collect();
    collapse_whitespace(&stripped)
}

fn parts_match(student: &str, expected: &str) -> bool {
    if student == expected {
        return true;
    }

    if expected.chars().count() <= 3 || student.chars().count() <= 3 {
        return false;
    }

    let expected_words: Vec<&str> = expected
        .split(' ')
        .filter(|word| word.chars().count() > 2)
        .collect();
    let student_words: Vec<&str> = student.split(' ').collect();

    let found = expected_words
        .iter()
        .filter(|word| {
            student_words
                .iter()
                .any(|s| s.contains(*word) || word.contains(*s))
        })
        .count();

    found as f64 >= (expected_words.len() as f64 * PARTIAL_CREDIT_THRESHOLD).ceil()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TEN_TERMS: &str = "alpha bravo charlie delta echo foxtrot golf hotel india juliet";

    #[test]
    fn test_full_marks() {
        let grade = regrade_question("eggs and toast", &"eggs and toast".into(), 4.0);
        assert_eq!(grade.score, 4.0);
        assert!(grade.is_correct);
        assert_eq!(grade.feedback, DEFAULT_FEEDBACK);
    }

    #[test]
    fn test_fuzzy_full_marks_keep_explanation() {
        let grade = regrade_question("egg and toast", &vec!["eggs", "toast"].into(), 2.0);
        assert_eq!(grade.score, 2.0);
        assert_eq!(grade.feedback, "All required terms present");
    }

    #[test]
    fn test_partial_credit_score() {
        let grade = regrade_question(
            "alpha bravo charlie delta echo foxtrot golf",
            &TEN_TERMS.into(),
            10.0,
        );
        assert!(!grade.is_correct);
        assert_eq!(grade.score, 7.0);
    }

    #[test]
    fn test_partial_credit_rounds_to_one_decimal() {
        // 7 of 9 terms: 3 * 0.777... = 2.333... -> 2.3
        let grade = regrade_question(
            "alpha bravo charlie delta echo foxtrot golf",
            &"alpha bravo charlie delta echo foxtrot golf hotel india".into(),
            3.0,
        );
        assert_eq!(grade.score, 2.3);
    }

    #[test]
    fn test_below_floor_scores_zero() {
        let grade = regrade_question("alpha bravo charlie delta echo foxtrot", &TEN_TERMS.into(), 10.0);
        assert_eq!(grade.score, 0.0);
        assert!(!grade.is_correct);
        assert!(grade.feedback.starts_with("Expected: "));
    }

    #[test]
    fn test_empty_expected_scores_zero() {
        let grade = regrade_question("anything", &"".into(), 5.0);
        assert_eq!(grade.score, 0.0);
        assert!(!grade.is_correct);
    }

    #[test]
    fn test_multi_part_full_credit() {
        let credit = multi_part_credit(&"toast, eggs".into(), &"eggs and toast".into(), 2);
        assert_eq!(credit, 2);
    }

    #[test]
    fn test_multi_part_partial_credit() {
        let credit = multi_part_credit(
            &vec!["went to the beach", "played football"].into(),
            &vec!["went to the beach", "played football", "visited grandparents"].into(),
            3,
        );
        assert_eq!(credit, 2);
    }

    #[test]
    fn test_multi_part_word_overlap() {
        // Long parts match when most of their longer words appear
        let credit = multi_part_credit(
            &"she visited her old grandparents; rain".into(),
            &"visited grandparents; sunny weather".into(),
            2,
        );
        assert_eq!(credit, 1);
    }

    #[test]
    fn test_multi_part_serial_comma() {
        let credit = multi_part_credit(&"toast".into(), &"eggs, bacon, and toast".into(), 3);
        assert_eq!(credit, 1);

        let credit = multi_part_credit(&"tea".into(), &"tea; or coffee".into(), 2);
        assert_eq!(credit, 1);
    }

    #[test]
    fn test_multi_part_single_point() {
        let credit = multi_part_credit(&"wrong".into(), &"eggs and toast".into(), 1);
        assert_eq!(credit, 0);
    }

    #[test]
    fn test_multi_part_single_expected_part() {
        let credit = multi_part_credit(&"nothing".into(), &"the beach".into(), 3);
        assert_eq!(credit, 0);
    }

    #[test]
    fn test_multi_part_empty_student() {
        let credit = multi_part_credit(&"  ".into(), &"eggs and toast".into(), 2);
        assert_eq!(credit, 0);
    }
}
