//! Progress tracker service: streak, views visited and trophies

use std::cell::RefCell;
use std::collections::BTreeSet;

use chrono::{Local, NaiveDate};

use super::models::*;
use super::streak::{advance_streak, StreakChange};
use super::trophies::{self, find_trophy, ALL_TROPHIES, EXPLORER, EXPLORER_VIEW_COUNT};
use crate::events::Listeners;
use crate::storage::{keys, read_json, read_or_default, write_or_log, SharedStore};

pub struct ProgressTracker {
    store: SharedStore,
    trophy_unlocked: Listeners<Trophy>,
    /// Unlocks of this session, kept even if saving them failed
    session_unlocks: RefCell<BTreeSet<String>>,
}

impl ProgressTracker {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            trophy_unlocked: Listeners::new(),
            session_unlocks: RefCell::new(BTreeSet::new()),
        }
    }

    /// Register a callback receiving each newly unlocked trophy
    pub fn on_trophy_unlocked(&self, callback: impl Fn(&Trophy) + 'static) {
        self.trophy_unlocked.subscribe(callback);
    }

    // ===== Streak =====

    /// Count today's visit; returns the streak length
    pub fn touch_streak(&self) -> u32 {
        self.touch_streak_on(Local::now().date_naive())
    }

    pub fn touch_streak_on(&self, today: NaiveDate) -> u32 {
        let previous = self.streak_record();
        let (record, change) = advance_streak(previous.as_ref(), today);

        if change == StreakChange::SameDay {
            return record.count;
        }

        match change {
            StreakChange::Extended => log::info!("Streak extended to {} days", record.count),
            _ => log::info!("Streak started on {}", today),
        }

        write_or_log(&*self.store, keys::STREAK, &record);
        self.unlock_all(&trophies::earned_by_streak(record.count));

        record.count
    }

    /// Current streak length; 1 before anything was stored
    pub fn current_streak(&self) -> u32 {
        self.streak_record().map_or(1, |record| record.count)
    }

    /// Stored streak, with a corrupt count of 0 read as 1
    pub fn streak_record(&self) -> Option<StreakRecord> {
        read_json::<StreakRecord>(&*self.store, keys::STREAK).map(|mut record| {
            record.count = record.count.max(1);
            record
        })
    }

    // ===== Activity =====

    /// Check the trophies an exercise event can unlock; returns the new ones
    pub fn record_activity(&self, event: &ActivityEvent) -> Vec<Trophy> {
        self.unlock_all(&trophies::earned_by(event))
    }

    /// Remember that a view was opened. Non-exercise views are ignored.
    pub fn record_view_visited(&self, view: &str) -> Vec<Trophy> {
        match view.parse::<ExerciseView>() {
            Ok(view) => self.record_view(view),
            Err(e) => {
                log::debug!("{}", e);
                Vec::new()
            }
        }
    }

    pub fn record_view(&self, view: ExerciseView) -> Vec<Trophy> {
        let mut visited: BTreeSet<String> = read_or_default(&*self.store, keys::VIEWS_VISITED);

        if visited.insert(view.as_str().to_string()) {
            write_or_log(&*self.store, keys::VIEWS_VISITED, &visited);
        }

        // Only names that still parse count, so stale entries never help
        let distinct = visited
            .iter()
            .filter(|name| name.parse::<ExerciseView>().is_ok())
            .count();

        if distinct >= EXPLORER_VIEW_COUNT {
            self.unlock_all(&[EXPLORER])
        } else {
            Vec::new()
        }
    }

    /// Exercise views opened at least once
    pub fn visited_views(&self) -> BTreeSet<ExerciseView> {
        let visited: BTreeSet<String> = read_or_default(&*self.store, keys::VIEWS_VISITED);
        visited.iter().filter_map(|name| name.parse().ok()).collect()
    }

    // ===== Trophies =====

    /// Ids of every unlocked trophy
    pub fn unlocked_trophies(&self) -> BTreeSet<String> {
        let mut unlocked: BTreeSet<String> = read_or_default(&*self.store, keys::UNLOCKED_TROPHIES);
        unlocked.extend(self.session_unlocks.borrow().iter().cloned());
        unlocked
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked_trophies().contains(id)
    }

    /// Every trophy of the catalog with its unlock state
    pub fn trophy_board(&self) -> Vec<TrophyStatus> {
        let unlocked = self.unlocked_trophies();
        ALL_TROPHIES
            .iter()
            .map(|trophy| TrophyStatus {
                trophy: *trophy,
                unlocked: unlocked.contains(trophy.id),
            })
            .collect()
    }

    /// Unlock the given ids, skipping those already unlocked. Saves once, then notifies.
    fn unlock_all(&self, ids: &[&str]) -> Vec<Trophy> {
        if ids.is_empty() {
            return Vec::new();
        }

        let mut unlocked = self.unlocked_trophies();
        let mut newly_unlocked = Vec::new();

        for id in ids {
            let Some(trophy) = find_trophy(id) else {
                log::warn!("Unknown trophy '{}'", id);
                continue;
            };
            if unlocked.insert(trophy.id.to_string()) {
                newly_unlocked.push(*trophy);
            }
        }

        if newly_unlocked.is_empty() {
            return newly_unlocked;
        }

        self.session_unlocks
            .borrow_mut()
            .extend(newly_unlocked.iter().map(|t| t.id.to_string()));
        write_or_log(&*self.store, keys::UNLOCKED_TROPHIES, &unlocked);

        for trophy in &newly_unlocked {
            log::info!("Trophy unlocked: {} ({})", trophy.name, trophy.id);
            self.trophy_unlocked.emit(trophy);
        }

        newly_unlocked
    }
}
