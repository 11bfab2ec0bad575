use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::candidate::MatchCandidate;
use crate::models::decision::{DecisionRecord, SwipeDecision};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRequest {
    pub candidate_id: String,
    pub decision: SwipeDecision,
}

/// GET /api/v1/matches/candidates
pub async fn handle_get_candidates(
    State(state): State<AppState>,
) -> Result<Json<Vec<MatchCandidate>>, AppError> {
    Ok(Json(state.session.candidates().await))
}

/// POST /api/v1/matches/decisions
///
/// Returns as soon as the in-memory ledger is updated — persistence is
/// best-effort in the background, so there is no failure mode to report.
pub async fn handle_record_decision(
    State(state): State<AppState>,
    Json(req): Json<DecisionRequest>,
) -> Result<StatusCode, AppError> {
    state.session.record_decision(&req.candidate_id, req.decision);
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/matches/decisions
pub async fn handle_list_decisions(
    State(state): State<AppState>,
) -> Result<Json<Vec<DecisionRecord>>, AppError> {
    Ok(Json(state.session.decisions()))
}
