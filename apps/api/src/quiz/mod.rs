//! Quiz answer surface — the preference-quiz flow's store and endpoints.
//! The matching engine only ever reads the snapshot; writes come from here.

pub mod handlers;
pub mod store;

pub use store::{JsonFileQuizStore, QuizStore};

#[cfg(test)]
pub use store::InMemoryQuizStore;
