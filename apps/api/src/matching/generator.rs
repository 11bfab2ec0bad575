//! Candidate Generator — the full deck pipeline over one catalog snapshot.
//!
//! Pure transform: (postings, answers, decided ids) → ordered candidates.
//! Recomputed from scratch on every call; nothing is incrementally
//! maintained, which is fine at catalog sizes this app sees.

use std::collections::HashSet;

use crate::matching::scorer::score_posting;
use crate::models::candidate::{CandidateProfile, MatchCandidate};
use crate::models::posting::ProjectPosting;
use crate::models::quiz::QuizAnswers;

/// Generates the ranked candidate deck.
///
/// Pipeline:
/// 1. Incomplete quiz answers → empty deck (precondition, not an error).
/// 2. Skip postings whose creator already has a decision record.
/// 3. Score each remaining posting; drop score-0 postings.
/// 4. Sort by score descending. The sort is stable, so equal scores keep
///    catalog order — insertion order is the tiebreak, deliberately.
pub fn generate_candidates(
    postings: &[ProjectPosting],
    answers: &QuizAnswers,
    decided: &HashSet<String>,
) -> Vec<MatchCandidate> {
    if !answers.is_complete() {
        return Vec::new();
    }

    let mut candidates: Vec<MatchCandidate> = Vec::new();

    for posting in postings {
        let candidate_id = posting.creator.clone();
        if decided.contains(&candidate_id) {
            continue;
        }

        let overlap = score_posting(posting, answers);
        if overlap.score == 0 {
            continue;
        }

        // Dedup across categories: a tag present in two categories appears
        // once, at its first-seen position (genres, then goals, then vibes).
        let mut seen = HashSet::new();
        let shared_tags: Vec<String> = overlap
            .shared_genres
            .into_iter()
            .chain(overlap.shared_goals)
            .chain(overlap.shared_vibes)
            .filter(|t| seen.insert(t.clone()))
            .collect();

        candidates.push(MatchCandidate {
            candidate_id,
            score: overlap.score,
            shared_tags,
            profile: build_profile(posting),
        });
    }

    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates
}

/// Projects a posting onto the card-face profile. The creator's real profile
/// is not consulted; only what the posting itself carries surfaces here.
fn build_profile(posting: &ProjectPosting) -> CandidateProfile {
    CandidateProfile {
        display_name: "Project Creator".to_string(),
        bio: posting.description.clone(),
        looking_for: posting.title.clone(),
        genres: posting.genres.clone(),
        goals: posting.goals.clone(),
        mood_tags: posting.vibes.clone(),
        portfolio_links: posting.external_links.clone(),
        created_at: posting.created_at,
        updated_at: posting.updated_at,
    }
}
