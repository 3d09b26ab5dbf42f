//! Request bodies shared by the API tests.

use serde_json::{json, Value};

/// Ten single-word terms, for partial credit boundaries.
pub const TEN_TERMS: &str = "alpha bravo charlie delta echo foxtrot golf hotel india juliet";

/// The first `n` terms of `TEN_TERMS`.
pub fn first_terms(n: usize) -> String {
    TEN_TERMS
        .split(' ')
        .take(n)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn check_request(student_answer: &str, expected_answer: Value) -> Value {
    json!({
        "student_answer": student_answer,
        "expected_answer": expected_answer,
    })
}

pub fn check_request_with_options(
    student_answer: &str,
    expected_answer: Value,
    options: Value,
) -> Value {
    json!({
        "student_answer": student_answer,
        "expected_answer": expected_answer,
        "options": options,
    })
}

pub fn regrade_request(student_answer: &str, correct_answer: Value, max_points: Option<f64>) -> Value {
    let mut body = json!({
        "student_answer": student_answer,
        "correct_answer": correct_answer,
    });
    if let Some(points) = max_points {
        body["max_points"] = json!(points);
    }
    body
}

pub fn validate_request(user_answer: &str, correct_answer: &str, language: Option<&str>) -> Value {
    let mut body = json!({
        "user_answer": user_answer,
        "correct_answer": correct_answer,
    });
    if let Some(language) = language {
        body["language"] = json!(language);
    }
    body
}
