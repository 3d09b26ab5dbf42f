//! API request and response types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::services::error_log::ErrorEntry;

// Re-export shared types from answer-core
pub use answer_core::types::{
    ExpectedAnswer, GradeResult, Language, MatchOptions, MatchResult, ValidationResult,
};

fn default_max_points() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

// === Grading API Types ===

/// Request to check an answer against the expected answer(s).
///
/// `expected_answer` is kept untyped so malformed shapes get a descriptive error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckAnswerRequest {
    pub student_answer: String,
    pub expected_answer: Value,
    #[serde(default)]
    pub options: MatchOptions,
}

/// Request to re-grade a stored answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegradeRequest {
    pub student_answer: String,
    pub correct_answer: Value,
    #[serde(default = "default_max_points")]
    pub max_points: f64,
}

/// Request to score a multi-part answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartCreditRequest {
    pub student_answer: Value,
    pub correct_answer: Value,
    pub points: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartCreditResponse {
    pub points_awarded: u32,
    pub points_possible: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityRequest {
    pub student_answer: String,
    pub correct_answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityResponse {
    pub similarity: f64,
}

// === Vocabulary API Types ===

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateVocabRequest {
    pub user_answer: String,
    pub correct_answer: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_true")]
    pub allow_synonyms: bool,
}

// === Admin API Types ===

#[derive(Debug, Clone, Serialize)]
pub struct ErrorLogResponse {
    pub errors: Vec<ErrorEntry>,
}
