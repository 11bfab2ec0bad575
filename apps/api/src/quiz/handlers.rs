use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::quiz::QuizAnswers;
use crate::state::AppState;

#[derive(Serialize)]
pub struct QuizResponse {
    #[serde(flatten)]
    pub answers: QuizAnswers,
    pub complete: bool,
}

/// GET /api/v1/quiz
pub async fn handle_get_quiz(State(state): State<AppState>) -> Result<Json<QuizResponse>, AppError> {
    let answers = state.quiz.load();
    let complete = answers.is_complete();
    Ok(Json(QuizResponse { answers, complete }))
}

/// PUT /api/v1/quiz
///
/// Whole-record save: the quiz flow sends the full answer set on every edit.
pub async fn handle_put_quiz(
    State(state): State<AppState>,
    Json(answers): Json<QuizAnswers>,
) -> Result<StatusCode, AppError> {
    state.quiz.save(&answers);
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/quiz — clears answers back to the empty state.
pub async fn handle_reset_quiz(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.quiz.reset();
    Ok(StatusCode::NO_CONTENT)
}
