mod kv_store;
pub mod settings;

use std::rc::Rc;

pub use kv_store::{
    read_json, read_or_default, write_or_log, FileStore, KeyValueStore, MemoryStore, Result,
    StorageError,
};
pub use settings::Settings;

/// Store handle shared by the services of one session
pub type SharedStore = Rc<dyn KeyValueStore>;

/// Logical storage keys
pub mod keys {
    pub const REVIEW_PROGRESS: &str = "review-progress";
    pub const STREAK: &str = "streak";
    pub const UNLOCKED_TROPHIES: &str = "unlocked-trophies";
    pub const VIEWS_VISITED: &str = "distinct-views-visited";
    pub const DISPLAY_NAME: &str = "display-name";

    /// Key of one game's leaderboard
    pub fn leaderboard(game: &str) -> String {
        format!("leaderboard:{}", game)
    }
}
