//! Data models for the review scheduler

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Highest mastery level an item can reach
pub const MAX_MASTERY_LEVEL: u8 = 7;

/// Spaced repetition state of one learnable item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    /// 0 = never reviewed, 1..=7 afterwards
    pub mastery_level: u8,
    /// Earliest moment the item is eligible for review again
    pub next_review: DateTime<Utc>,
}

impl ReviewItem {
    /// State of an item that was never reviewed
    pub fn unseen(now: DateTime<Utc>) -> Self {
        Self {
            mastery_level: 0,
            next_review: now,
        }
    }

    pub fn is_due_at(&self, now: DateTime<Utc>) -> bool {
        self.next_review <= now
    }
}

/// Every recorded item, keyed by its identifier (the infinitive for verbs)
pub type ReviewProgress = BTreeMap<String, ReviewItem>;

/// Anything that can be scheduled for review
pub trait ReviewKey {
    fn review_key(&self) -> &str;
}

impl ReviewKey for str {
    fn review_key(&self) -> &str {
        self
    }
}

impl ReviewKey for String {
    fn review_key(&self) -> &str {
        self
    }
}

impl<T: ReviewKey + ?Sized> ReviewKey for &T {
    fn review_key(&self) -> &str {
        (**self).review_key()
    }
}

/// Mastery overview of a pool of items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterySummary {
    pub total: usize,
    /// Items without any recorded review
    pub new_items: usize,
    /// Items eligible right now, new ones included
    pub due_items: usize,
    /// Item count per mastery level, index 0 = new
    pub by_level: [usize; MAX_MASTERY_LEVEL as usize + 1],
}
