//! Review scheduler service
//!
//! Reads and writes the whole `review-progress` blob on every call, so the
//! service itself holds no state besides its listeners.

use chrono::{DateTime, Local, TimeZone, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use super::algorithm::{calculate_next_review, ReviewResult};
use super::models::*;
use crate::events::Listeners;
use crate::storage::{keys, read_or_default, write_or_log, SharedStore};

pub struct ReviewScheduler {
    store: SharedStore,
    progress_updated: Listeners<ReviewProgress>,
}

impl ReviewScheduler {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            progress_updated: Listeners::new(),
        }
    }

    /// Register a callback receiving the full mapping after every recorded outcome
    pub fn on_progress_updated(&self, callback: impl Fn(&ReviewProgress) + 'static) {
        self.progress_updated.subscribe(callback);
    }

    /// All recorded items; empty when storage is missing or unreadable
    pub fn progress(&self) -> ReviewProgress {
        read_or_default(&*self.store, keys::REVIEW_PROGRESS)
    }

    /// Stored state of an item, or a fresh level-0 item due now
    pub fn get_item(&self, id: &str) -> ReviewItem {
        self.get_item_at(id, Utc::now())
    }

    pub fn get_item_at(&self, id: &str, now: DateTime<Utc>) -> ReviewItem {
        self.progress()
            .remove(id)
            .unwrap_or_else(|| ReviewItem::unseen(now))
    }

    /// Record an answer and reschedule the item from the start of today
    pub fn record_outcome(&self, id: &str, was_correct: bool) -> ReviewItem {
        self.record_outcome_at(id, was_correct, &Local::now())
    }

    pub fn record_outcome_at<Tz: TimeZone>(
        &self,
        id: &str,
        was_correct: bool,
        now: &DateTime<Tz>,
    ) -> ReviewItem {
        let mut progress = self.progress();
        let current_level = progress.get(id).map_or(0, |item| item.mastery_level);

        let ReviewResult {
            mastery_level,
            interval_days,
            next_review,
        } = calculate_next_review(current_level, was_correct, now);

        log::debug!(
            "{} answered {}: mastery {} -> {}, next review in {} day(s)",
            id,
            if was_correct { "correctly" } else { "incorrectly" },
            current_level,
            mastery_level,
            interval_days
        );

        let item = ReviewItem {
            mastery_level,
            next_review,
        };
        progress.insert(id.to_string(), item.clone());

        // A failed write loses this update only; listeners still see it
        write_or_log(&*self.store, keys::REVIEW_PROGRESS, &progress);
        self.progress_updated.emit(&progress);

        item
    }

    /// Items that are new or due, least mastered first, ties shuffled
    pub fn due_items<'a, T: ReviewKey>(&self, pool: &'a [T]) -> Vec<&'a T> {
        self.due_items_at(pool, Utc::now(), &mut rand::thread_rng())
    }

    pub fn due_items_at<'a, T, R>(&self, pool: &'a [T], now: DateTime<Utc>, rng: &mut R) -> Vec<&'a T>
    where
        T: ReviewKey,
        R: Rng + ?Sized,
    {
        let progress = self.progress();

        let mut due: Vec<(u8, &'a T)> = pool
            .iter()
            .filter_map(|candidate| match progress.get(candidate.review_key()) {
                None => Some((0, candidate)),
                Some(item) if item.is_due_at(now) => Some((item.mastery_level, candidate)),
                Some(_) => None,
            })
            .collect();

        // Shuffle first so the stable sort leaves equal levels in random order
        due.shuffle(rng);
        due.sort_by_key(|(level, _)| *level);

        due.into_iter().map(|(_, candidate)| candidate).collect()
    }

    /// Per-level counts for a pool of items
    pub fn mastery_summary<T: ReviewKey>(&self, pool: &[T]) -> MasterySummary {
        self.mastery_summary_at(pool, Utc::now())
    }

    pub fn mastery_summary_at<T: ReviewKey>(&self, pool: &[T], now: DateTime<Utc>) -> MasterySummary {
        let progress = self.progress();
        let mut summary = MasterySummary {
            total: pool.len(),
            ..MasterySummary::default()
        };

        for candidate in pool {
            match progress.get(candidate.review_key()) {
                None => {
                    summary.new_items += 1;
                    summary.due_items += 1;
                    summary.by_level[0] += 1;
                }
                Some(item) => {
                    let level = item.mastery_level.min(MAX_MASTERY_LEVEL) as usize;
                    summary.by_level[level] += 1;
                    if item.is_due_at(now) {
                        summary.due_items += 1;
                    }
                }
            }
        }

        summary
    }
}
