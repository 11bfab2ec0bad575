use std::sync::Arc;

use crate::config::Config;
use crate::matching::MatchingSession;
use crate::quiz::QuizStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The matching engine facade. Owns the decision ledger exclusively.
    pub session: Arc<MatchingSession>,
    /// Quiz answer store, shared with the session's read side.
    pub quiz: Arc<dyn QuizStore>,
    /// Runtime settings; handlers do not read these yet.
    #[allow(dead_code)]
    pub config: Config,
}
