pub mod leaderboard;
pub mod progress;
pub mod review;
pub mod verbs;
