use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display projection for a surfaced candidate. Built from the posting, not
/// from a real user profile — the presentation layer renders it as the card
/// face and nothing else reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub display_name: String,
    pub bio: String,
    pub looking_for: String,
    pub genres: Vec<String>,
    pub goals: Vec<String>,
    pub mood_tags: Vec<String>,
    pub portfolio_links: Vec<(String, String)>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A ranked match, recomputed from scratch on every generation pass.
///
/// Invariants: `score > 0`, and `candidate_id` has no record in the decision
/// ledger at generation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCandidate {
    /// Stringified creator principal of the originating posting.
    pub candidate_id: String,
    pub score: u32,
    /// Matched tags across all three categories, deduplicated, first-seen
    /// order: genres, then goals, then vibes.
    pub shared_tags: Vec<String>,
    pub profile: CandidateProfile,
}
