//! A learner's session: the services wired together over one store

use std::path::Path;
use std::rc::Rc;

use crate::leaderboard::Leaderboard;
use crate::progress::{ActivityEvent, ProgressTracker, Trophy};
use crate::review::ReviewScheduler;
use crate::storage::settings::load_settings;
use crate::storage::{FileStore, Result, Settings, SharedStore};
use crate::verbs::VerbCatalog;

pub struct Trainer {
    settings: Settings,
    catalog: VerbCatalog,
    scheduler: ReviewScheduler,
    tracker: Rc<ProgressTracker>,
    leaderboard: Leaderboard,
}

impl Trainer {
    /// Open the file-backed session stored in `data_dir`
    pub fn open(data_dir: &Path) -> Result<Self> {
        let settings = load_settings(data_dir)?;

        let store = FileStore::new(data_dir.join("store"));
        store.init()?;
        log::debug!("Opened store at {}", store.base_path().display());

        Ok(Self::with_store(Rc::new(store), settings))
    }

    /// Build a session over any store
    pub fn with_store(store: SharedStore, settings: Settings) -> Self {
        let scheduler = ReviewScheduler::new(Rc::clone(&store));
        let tracker = Rc::new(ProgressTracker::new(Rc::clone(&store)));
        let leaderboard = Leaderboard::new(
            store,
            settings.leaderboard_size,
            settings.default_player_name.clone(),
        );

        let listener = Rc::clone(&tracker);
        scheduler.on_progress_updated(move |progress| {
            listener.record_activity(&ActivityEvent::ReviewProgressUpdated {
                progress: progress.clone(),
            });
        });

        Self {
            settings,
            catalog: VerbCatalog::builtin(),
            scheduler,
            tracker,
            leaderboard,
        }
    }

    /// Register a callback receiving each newly unlocked trophy
    pub fn on_trophy_unlocked(&self, callback: impl Fn(&Trophy) + 'static) {
        self.tracker.on_trophy_unlocked(callback);
    }

    /// Count today's visit; call once listeners are registered. Returns the streak length.
    pub fn start_visit(&self) -> u32 {
        self.tracker.touch_streak()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn catalog(&self) -> &VerbCatalog {
        &self.catalog
    }

    pub fn scheduler(&self) -> &ReviewScheduler {
        &self.scheduler
    }

    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }
}
