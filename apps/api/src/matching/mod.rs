//! Matching Engine — turns quiz answers plus the project catalog into a
//! ranked, decision-filtered candidate deck and records swipe decisions.

pub mod generator;
pub mod handlers;
pub mod scorer;
pub mod session;

pub use session::MatchingSession;
