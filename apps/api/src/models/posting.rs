use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project posting as served by the Project Catalog. Read-only to this
/// service — the catalog owns the records, we only consume them.
///
/// Tag fields default to empty when absent in the payload: a posting missing
/// `genres`/`goals`/`vibes` still participates in matching with whatever
/// partial tag sets it has.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPosting {
    pub id: String,
    /// Opaque principal of the posting's creator. Doubles as the candidate
    /// identity for matching.
    pub creator: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub vibes: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// (label, url) pairs, passed through to the display projection.
    #[serde(default)]
    pub external_links: Vec<(String, String)>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
