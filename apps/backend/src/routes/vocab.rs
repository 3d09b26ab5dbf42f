//! Vocabulary validation endpoint

use axum::Json;

use answer_core::validation;

use crate::models::*;

/// POST /api/vocab/validate
pub async fn validate(Json(payload): Json<ValidateVocabRequest>) -> Json<ValidationResult> {
    let result = validation::validate_answer(
        &payload.user_answer,
        &payload.correct_answer,
        payload.language,
        payload.allow_synonyms,
    );

    tracing::debug!(
        language = payload.language.as_str(),
        is_correct = result.is_correct,
        missing_accents = result.missing_accents,
        "Validated vocabulary answer"
    );

    Json(result)
}
