//! Matching Session — the public facade over the engine.
//!
//! Holds no candidate cache: the quiz answers and catalog can both change
//! out of band, so every `candidates()` call recomputes the deck from the
//! latest inputs. Exclusion after a decision flows purely through the
//! generator re-reading the ledger on the next call.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::CatalogSource;
use crate::ledger::DecisionLedger;
use crate::matching::generator::generate_candidates;
use crate::models::candidate::MatchCandidate;
use crate::models::decision::{DecisionRecord, SwipeDecision};
use crate::quiz::QuizStore;

pub struct MatchingSession {
    catalog: Arc<dyn CatalogSource>,
    quiz: Arc<dyn QuizStore>,
    ledger: DecisionLedger,
}

impl MatchingSession {
    /// The session is the ledger's sole owner and only writer; catalog and
    /// quiz store stay read-only collaborators.
    pub fn new(
        catalog: Arc<dyn CatalogSource>,
        quiz: Arc<dyn QuizStore>,
        ledger: DecisionLedger,
    ) -> Self {
        Self {
            catalog,
            quiz,
            ledger,
        }
    }

    /// The ranked, decision-filtered deck, freshly generated.
    ///
    /// Never fails: an incomplete quiz or an unavailable catalog yields an
    /// empty deck. With an incomplete quiz the fetch is skipped outright.
    pub async fn candidates(&self) -> Vec<MatchCandidate> {
        let answers = self.quiz.load();
        if !answers.is_complete() {
            debug!("quiz answers incomplete, returning empty deck");
            return Vec::new();
        }

        let postings = match self.catalog.fetch_postings().await {
            Ok(postings) => postings,
            Err(e) => {
                warn!("catalog unavailable, returning empty deck: {e}");
                return Vec::new();
            }
        };

        generate_candidates(&postings, &answers, &self.ledger.decided_ids())
    }

    /// Records a swipe. Returns immediately; durability is best-effort in
    /// the background. The next `candidates()` call will exclude this id.
    pub fn record_decision(&self, candidate_id: &str, decision: SwipeDecision) {
        self.ledger.record(candidate_id, decision);
    }

    /// All decisions on file, for the read-only decisions surface.
    pub fn decisions(&self) -> Vec<DecisionRecord> {
        self.ledger.all()
    }
}
