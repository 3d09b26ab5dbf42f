//! Core types for answer grading.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AnswerError, Result};

/// One accepted answer, or an ordered list of acceptable alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpectedAnswer {
    One(String),
    Many(Vec<String>),
}

impl ExpectedAnswer {
    /// Build from an untyped JSON value (a string or an array of strings).
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(Self::One(s.clone())),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    item.as_str()
                        .map(str::to_string)
                        .ok_or(AnswerError::InvalidAlternative { index })
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::Many),
            Value::Null => Err(AnswerError::InvalidExpectedAnswer { found: "null" }),
            Value::Bool(_) => Err(AnswerError::InvalidExpectedAnswer { found: "boolean" }),
            Value::Number(_) => Err(AnswerError::InvalidExpectedAnswer { found: "number" }),
            Value::Object(_) => Err(AnswerError::InvalidExpectedAnswer { found: "object" }),
        }
    }

    /// All accepted alternatives, in order.
    pub fn alternatives(&self) -> &[String] {
        match self {
            Self::One(s) => std::slice::from_ref(s),
            Self::Many(v) => v,
        }
    }
}

impl From<&str> for ExpectedAnswer {
    fn from(s: &str) -> Self {
        Self::One(s.to_string())
    }
}

impl From<String> for ExpectedAnswer {
    fn from(s: String) -> Self {
        Self::One(s)
    }
}

impl From<Vec<String>> for ExpectedAnswer {
    fn from(v: Vec<String>) -> Self {
        Self::Many(v)
    }
}

impl From<Vec<&str>> for ExpectedAnswer {
    fn from(v: Vec<&str>) -> Self {
        Self::Many(v.into_iter().map(str::to_string).collect())
    }
}

/// Options controlling how a free-text answer is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Skip lowercasing during normalization.
    pub case_sensitive: bool,
    /// Only exact (post-normalization) equality counts.
    pub strict_mode: bool,
    /// Award partial credit for match ratios at or above the threshold.
    pub allow_partial_credit: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            strict_mode: false,
            allow_partial_credit: true,
        }
    }
}

/// Result of matching a student answer against the expected answer(s).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub is_correct: bool,
    /// Fraction of required terms matched, only set when partial credit applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_credit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl MatchResult {
    pub(crate) fn correct() -> Self {
        Self {
            is_correct: true,
            partial_credit: None,
            explanation: None,
        }
    }

    pub(crate) fn incorrect() -> Self {
        Self {
            is_correct: false,
            partial_credit: None,
            explanation: None,
        }
    }
}

/// Score awarded for a single question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeResult {
    pub score: f64,
    pub is_correct: bool,
    pub feedback: String,
}

/// Outcome of vocabulary answer validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_correct: bool,
    /// Correct only once accents are ignored.
    pub missing_accents: bool,
}

impl ValidationResult {
    pub(crate) fn rejected() -> Self {
        Self {
            is_correct: false,
            missing_accents: false,
        }
    }
}

/// Language of a vocabulary item.
///
/// Deserializes from any language code through [`Language::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Language {
    En,
    Es,
    Fr,
    Other,
}

impl Default for Language {
    fn default() -> Self {
        Self::En
    }
}

impl Language {
    /// Get the language code as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::Other => "other",
        }
    }

    /// Parse from a language code. Unknown codes map to `Other`.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Self::En,
            "es" => Self::Es,
            "fr" => Self::Fr,
            _ => Self::Other,
        }
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}
