//! Candidate Scorer — pure tag-overlap relevance scoring.
//!
//! Tag equality is exact, case-sensitive string comparison. No fuzzy
//! matching, no randomness: identical inputs always score identically.

use crate::models::posting::ProjectPosting;
use crate::models::quiz::QuizAnswers;

/// Genre overlap counts more than goal or vibe overlap. Fixed policy
/// constants, not configuration.
const GENRE_WEIGHT: u32 = 3;
const GOAL_WEIGHT: u32 = 2;
const VIBE_WEIGHT: u32 = 2;

/// Per-category tag intersections plus the weighted relevance score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOverlap {
    pub shared_genres: Vec<String>,
    pub shared_goals: Vec<String>,
    pub shared_vibes: Vec<String>,
    pub score: u32,
}

/// Scores one posting against the quiz answers.
///
/// `score = 3·|shared genres| + 2·|shared goals| + 2·|shared vibes|`.
/// Shared tags keep the posting's order within each category. No side
/// effects; ties are left for the generator to break.
pub fn score_posting(posting: &ProjectPosting, answers: &QuizAnswers) -> TagOverlap {
    let shared_genres = intersect(&posting.genres, &answers.genres);
    let shared_goals = intersect(&posting.goals, &answers.goals);
    let shared_vibes = intersect(&posting.vibes, &answers.vibes);

    let score = GENRE_WEIGHT * shared_genres.len() as u32
        + GOAL_WEIGHT * shared_goals.len() as u32
        + VIBE_WEIGHT * shared_vibes.len() as u32;

    TagOverlap {
        shared_genres,
        shared_goals,
        shared_vibes,
        score,
    }
}

fn intersect(posting_tags: &[String], answer_tags: &[String]) -> Vec<String> {
    posting_tags
        .iter()
        .filter(|t| answer_tags.contains(*t))
        .cloned()
        .collect()
}
