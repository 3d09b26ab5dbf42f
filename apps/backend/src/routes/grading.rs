//! Grading endpoints

use axum::Json;

use answer_core::{distance, matcher, scoring};

use crate::error::{ApiError, Result};
use crate::models::*;

/// POST /api/grading/check
pub async fn check(Json(payload): Json<CheckAnswerRequest>) -> Result<Json<MatchResult>> {
    let expected = ExpectedAnswer::from_json(&payload.expected_answer)?;

    let result = matcher::is_answer_correct(&payload.student_answer, &expected, &payload.options);

    tracing::debug!(
        is_correct = result.is_correct,
        partial_credit = ?result.partial_credit,
        "Checked answer"
    );

    Ok(Json(result))
}

/// POST /api/grading/regrade
pub async fn regrade(Json(payload): Json<RegradeRequest>) -> Result<Json<GradeResult>> {
    if !payload.max_points.is_finite() || payload.max_points < 0.0 {
        return Err(ApiError::BadRequest(format!(
            "max_points must be a non-negative number, got {}",
            payload.max_points
        )));
    }

    let expected = ExpectedAnswer::from_json(&payload.correct_answer)?;
    let grade = scoring::regrade_question(&payload.student_answer, &expected, payload.max_points);

    tracing::info!(
        score = grade.score,
        max_points = payload.max_points,
        is_correct = grade.is_correct,
        "Regraded answer"
    );

    Ok(Json(grade))
}

/// POST /api/grading/parts
pub async fn parts(Json(payload): Json<PartCreditRequest>) -> Result<Json<PartCreditResponse>> {
    let student = ExpectedAnswer::from_json(&payload.student_answer)?;
    let expected = ExpectedAnswer::from_json(&payload.correct_answer)?;

    let points_awarded = scoring::multi_part_credit(&student, &expected, payload.points);

    Ok(Json(PartCreditResponse {
        points_awarded,
        points_possible: payload.points,
    }))
}

/// POST /api/grading/similarity
pub async fn similarity(Json(payload): Json<SimilarityRequest>) -> Json<SimilarityResponse> {
    Json(SimilarityResponse {
        similarity: distance::similarity(&payload.student_answer, &payload.correct_answer),
    })
}
