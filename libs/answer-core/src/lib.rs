//! Answer grading library shared by the LanguageGems services.
//!
//! Provides:
//! - Text normalization and Levenshtein distance
//! - Token-set answer matching with typo, plural and partial-credit handling
//! - Question scoring (single answers and multi-part answers)
//! - Vocabulary validation (synonyms, contractions, number words, accents)

pub mod distance;
pub mod error;
pub mod lexicon;
pub mod matcher;
pub mod normalize;
pub mod scoring;
pub mod types;
pub mod validation;

pub use distance::{levenshtein, similarity};
pub use error::{AnswerError, Result};
pub use matcher::{is_answer_correct, PARTIAL_CREDIT_THRESHOLD, TYPO_TOLERANCE};
pub use normalize::{normalize, normalize_with, strip_accents};
pub use scoring::{multi_part_credit, regrade_question};
pub use types::{
    ExpectedAnswer, GradeResult, Language, MatchOptions, MatchResult, ValidationResult,
};
pub use validation::{validate_answer, validate_answer_basic};
