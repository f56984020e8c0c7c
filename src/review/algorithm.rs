//! Mastery ladder
//!
//! Each item sits on a level from 1 to 7 once reviewed. A correct answer
//! climbs one level; a wrong answer drops one level, or falls back to level 1
//! from levels 1 and 2. Level 0 only marks items never reviewed.
//!
//! Review intervals per level (days):
//! - 1: 1
//! - 2: 3
//! - 3: 7
//! - 4: 14
//! - 5: 30
//! - 6: 60
//! - 7: 120
//!
//! The next review lands at midnight (in the caller's timezone) so that every
//! item due on a given day becomes available at the same time.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};

use super::models::MAX_MASTERY_LEVEL;

/// Result of recording an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewResult {
    pub mastery_level: u8,
    pub interval_days: i64,
    pub next_review: DateTime<Utc>,
}

/// Review interval for a mastery level
pub fn interval_days(level: u8) -> i64 {
    match level {
        1 => 1,
        2 => 3,
        3 => 7,
        4 => 14,
        5 => 30,
        6 => 60,
        7 => 120,
        _ => 1,
    }
}

/// Level after one answer
pub fn next_mastery_level(current: u8, was_correct: bool) -> u8 {
    let current = current.min(MAX_MASTERY_LEVEL);
    if was_correct {
        (current + 1).min(MAX_MASTERY_LEVEL)
    } else if current > 2 {
        current - 1
    } else {
        1
    }
}

/// Midnight `days_ahead` days after the calendar day of `now`, in `now`'s timezone
pub fn start_of_day_plus<Tz: TimeZone>(now: &DateTime<Tz>, days_ahead: i64) -> DateTime<Utc> {
    let date = now.date_naive() + Duration::days(days_ahead);
    let midnight = date.and_time(NaiveTime::MIN);

    // A DST gap can swallow midnight; take the first whole hour that exists
    let tz = now.timezone();
    (0..=3)
        .map(|hours| midnight + Duration::hours(hours))
        .find_map(|local| tz.from_local_datetime(&local).earliest())
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}

/// Calculate the new level and next review date after an answer
pub fn calculate_next_review<Tz: TimeZone>(
    current_level: u8,
    was_correct: bool,
    now: &DateTime<Tz>,
) -> ReviewResult {
    let mastery_level = next_mastery_level(current_level, was_correct);
    let interval_days = interval_days(mastery_level);

    ReviewResult {
        mastery_level,
        interval_days,
        next_review: start_of_day_plus(now, interval_days),
    }
}

/// Format an interval in days to a human-readable string
pub fn format_interval(days: i64) -> String {
    if days <= 0 {
        "now".to_string()
    } else if days < 7 {
        format!("{}d", days)
    } else if days < 30 {
        format!("{}w", days / 7)
    } else if days < 365 {
        format!("{}mo", days / 30)
    } else {
        format!("{}y", days / 365)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, LocalResult, NaiveDate, NaiveDateTime};

    /// UTC-4 until local midnight of 2026-10-18, then UTC-3: 00:00-00:59 never happen
    #[derive(Debug, Clone, Copy)]
    struct MidnightGap;

    impl MidnightGap {
        fn gap_start() -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap().and_time(NaiveTime::MIN)
        }

        fn before() -> FixedOffset {
            FixedOffset::west_opt(4 * 3600).unwrap()
        }

        fn after() -> FixedOffset {
            FixedOffset::west_opt(3 * 3600).unwrap()
        }
    }

    impl TimeZone for MidnightGap {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            MidnightGap
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            self.offset_from_local_datetime(&local.and_time(NaiveTime::MIN))
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            let start = Self::gap_start();
            if *local < start {
                LocalResult::Single(Self::before())
            } else if *local < start + Duration::hours(1) {
                LocalResult::None
            } else {
                LocalResult::Single(Self::after())
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_time(NaiveTime::MIN))
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            // the jump happens at 04:00 UTC
            if *utc < Self::gap_start() + Duration::hours(4) {
                Self::before()
            } else {
                Self::after()
            }
        }
    }

    fn afternoon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 15, 30, 0).unwrap()
    }

    #[test]
    fn test_correct_climbs_one_level() {
        for level in 0..MAX_MASTERY_LEVEL {
            assert_eq!(next_mastery_level(level, true), level + 1);
        }
        assert_eq!(next_mastery_level(MAX_MASTERY_LEVEL, true), MAX_MASTERY_LEVEL);
    }

    #[test]
    fn test_incorrect_is_forgiving() {
        assert_eq!(next_mastery_level(7, false), 6);
        assert_eq!(next_mastery_level(5, false), 4);
        assert_eq!(next_mastery_level(3, false), 2);
        assert_eq!(next_mastery_level(2, false), 1);
        assert_eq!(next_mastery_level(1, false), 1);
        // never-reviewed items land on 1, not 0
        assert_eq!(next_mastery_level(0, false), 1);
    }

    #[test]
    fn test_out_of_range_level_is_clamped() {
        assert_eq!(next_mastery_level(42, true), MAX_MASTERY_LEVEL);
        assert_eq!(next_mastery_level(42, false), MAX_MASTERY_LEVEL - 1);
    }

    #[test]
    fn test_interval_table() {
        let table: Vec<i64> = (1..=7).map(interval_days).collect();
        assert_eq!(table, vec![1, 3, 7, 14, 30, 60, 120]);
    }

    #[test]
    fn test_next_review_is_midnight() {
        let result = calculate_next_review(0, true, &afternoon());
        assert_eq!(result.mastery_level, 1);
        assert_eq!(result.next_review, Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap());

        let result = calculate_next_review(5, false, &afternoon());
        assert_eq!(result.mastery_level, 4);
        assert_eq!(result.interval_days, 14);
        assert_eq!(result.next_review, Utc.with_ymd_and_hms(2026, 10, 31, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_next_review_is_deterministic() {
        let a = calculate_next_review(3, true, &afternoon());
        let b = calculate_next_review(3, true, &afternoon());
        assert_eq!(a, b);
    }

    #[test]
    fn test_next_review_uses_local_calendar_day() {
        // 23:30 in UTC is already the next day at UTC+2
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = Utc
            .with_ymd_and_hms(2026, 10, 17, 23, 30, 0)
            .unwrap()
            .with_timezone(&tz);

        let next = start_of_day_plus(&now, 1);
        // midnight of Oct 19 at UTC+2
        assert_eq!(next, Utc.with_ymd_and_hms(2026, 10, 18, 22, 0, 0).unwrap());
    }

    #[test]
    fn test_midnight_in_dst_gap_uses_first_valid_hour() {
        let now = Utc
            .with_ymd_and_hms(2026, 10, 17, 19, 0, 0)
            .unwrap()
            .with_timezone(&MidnightGap);
        assert_eq!(now.date_naive(), NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());

        // 01:00 local at UTC-3, not the previous evening
        let next = start_of_day_plus(&now, 1);
        assert_eq!(next, Utc.with_ymd_and_hms(2026, 10, 18, 4, 0, 0).unwrap());
    }

    #[test]
    fn test_format_interval() {
        assert_eq!(format_interval(0), "now");
        assert_eq!(format_interval(1), "1d");
        assert_eq!(format_interval(3), "3d");
        assert_eq!(format_interval(7), "1w");
        assert_eq!(format_interval(14), "2w");
        assert_eq!(format_interval(30), "1mo");
        assert_eq!(format_interval(120), "4mo");
        assert_eq!(format_interval(730), "2y");
    }
}
