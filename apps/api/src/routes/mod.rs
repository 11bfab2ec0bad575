pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers as match_handlers;
use crate::quiz::handlers as quiz_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching engine surface
        .route(
            "/api/v1/matches/candidates",
            get(match_handlers::handle_get_candidates),
        )
        .route(
            "/api/v1/matches/decisions",
            post(match_handlers::handle_record_decision)
                .get(match_handlers::handle_list_decisions),
        )
        // Quiz answer store
        .route(
            "/api/v1/quiz",
            get(quiz_handlers::handle_get_quiz)
                .put(quiz_handlers::handle_put_quiz)
                .delete(quiz_handlers::handle_reset_quiz),
        )
        .with_state(state)
}
