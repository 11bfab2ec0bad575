//! Quiz Answer Store — owned by the quiz flow, read-only to the matching
//! engine. Injected as a trait object so tests can swap in an in-memory
//! fake instead of touching the filesystem.

use std::fs;
use std::path::PathBuf;

use tracing::warn;

use crate::models::quiz::QuizAnswers;

/// Load/save/reset over the single quiz-answers record. Failures never
/// surface to callers: a bad read degrades to empty answers (which gates
/// matching off), a bad write is logged and dropped.
pub trait QuizStore: Send + Sync {
    fn load(&self) -> QuizAnswers;
    fn save(&self, answers: &QuizAnswers);
    fn reset(&self);
}

pub struct JsonFileQuizStore {
    path: PathBuf,
}

impl JsonFileQuizStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl QuizStore for JsonFileQuizStore {
    fn load(&self) -> QuizAnswers {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return QuizAnswers::default(),
            Err(e) => {
                warn!("failed to read quiz answers, treating as empty: {e}");
                return QuizAnswers::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(answers) => answers,
            Err(e) => {
                warn!("failed to parse quiz answers, treating as empty: {e}");
                QuizAnswers::default()
            }
        }
    }

    fn save(&self, answers: &QuizAnswers) {
        let json = match serde_json::to_string_pretty(answers) {
            Ok(json) => json,
            Err(e) => {
                warn!("failed to serialize quiz answers: {e}");
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, json) {
            warn!("failed to save quiz answers: {e}");
        }
    }

    fn reset(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("failed to reset quiz answers: {e}");
            }
        }
    }
}

/// In-memory store for deterministic tests.
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryQuizStore {
    answers: std::sync::Mutex<QuizAnswers>,
}

#[cfg(test)]
impl InMemoryQuizStore {
    pub fn with_answers(answers: QuizAnswers) -> Self {
        Self {
            answers: std::sync::Mutex::new(answers),
        }
    }
}

#[cfg(test)]
impl QuizStore for InMemoryQuizStore {
    fn load(&self) -> QuizAnswers {
        self.answers.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    fn save(&self, answers: &QuizAnswers) {
        *self.answers.lock().unwrap_or_else(|p| p.into_inner()) = answers.clone();
    }

    fn reset(&self) {
        *self.answers.lock().unwrap_or_else(|p| p.into_inner()) = QuizAnswers::default();
    }
}
