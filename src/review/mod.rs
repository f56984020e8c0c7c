//! Spaced repetition for learnable items
//!
//! This module provides:
//! - Per-item mastery levels (0-7) with a forgiving ladder
//! - Fixed review intervals from 1 to 120 days
//! - Due-item selection, least mastered first

pub mod algorithm;
pub mod models;
pub mod scheduler;

pub use models::*;
pub use scheduler::ReviewScheduler;
