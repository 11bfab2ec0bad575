pub mod candidate;
pub mod decision;
pub mod posting;
pub mod quiz;
