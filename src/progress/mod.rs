//! Streak and trophy tracking

pub mod models;
pub mod streak;
pub mod trophies;
pub mod tracker;

pub use models::*;
pub use tracker::ProgressTracker;
