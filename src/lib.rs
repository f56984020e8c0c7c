pub mod events;
pub mod leaderboard;
pub mod progress;
pub mod review;
pub mod session;
pub mod storage;
pub mod verbs;

pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use progress::{ActivityEvent, ExerciseView, ProgressTracker, Trophy};
pub use review::{ReviewItem, ReviewProgress, ReviewScheduler};
pub use session::Trainer;
pub use storage::{FileStore, KeyValueStore, MemoryStore, Settings, StorageError};
pub use verbs::{Verb, VerbCatalog};
