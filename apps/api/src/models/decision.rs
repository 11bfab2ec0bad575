use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A swipe verdict on a candidate. Irreversible within a session — there is
/// no undo, only overwrite by a later decision for the same candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDecision {
    Like,
    Pass,
}

/// One recorded decision. The ledger holds at most one per `candidate_id`;
/// recording again replaces the earlier record wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRecord {
    pub candidate_id: String,
    pub decision: SwipeDecision,
    pub decided_at: DateTime<Utc>,
}
