use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// The user's preference quiz answers — the matching engine's criteria.
///
/// Starts entirely empty and is filled in incrementally by the quiz flow.
/// `inspirations` is display-only and never participates in scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizAnswers {
    pub skill_level: Option<SkillLevel>,
    pub genres: Vec<String>,
    pub goals: Vec<String>,
    pub vibes: Vec<String>,
    pub availability: String,
    pub inspirations: Vec<String>,
}

impl QuizAnswers {
    /// Complete ⇔ skill level set, genres/goals/vibes each non-empty, and
    /// availability non-empty. Matching is gated on this; an incomplete quiz
    /// yields an empty deck rather than a partial match.
    pub fn is_complete(&self) -> bool {
        self.skill_level.is_some()
            && !self.genres.is_empty()
            && !self.goals.is_empty()
            && !self.vibes.is_empty()
            && !self.availability.is_empty()
    }
}
