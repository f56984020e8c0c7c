//! Daily visit streak

use chrono::{Duration, NaiveDate};

use super::models::StreakRecord;

/// What a visit did to the streak
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// Already counted today
    SameDay,
    /// Last visit was yesterday
    Extended,
    /// First visit ever, or at least one day was missed
    Restarted,
}

/// Apply a visit on `today` to the stored record
pub fn advance_streak(previous: Option<&StreakRecord>, today: NaiveDate) -> (StreakRecord, StreakChange) {
    let Some(previous) = previous else {
        return (StreakRecord::first_visit(today), StreakChange::Restarted);
    };

    // Stored counts are untrusted: 0 reads as 1, the top value stays put
    let count = previous.count.max(1);

    if previous.last_visit_date == today {
        let record = StreakRecord {
            last_visit_date: today,
            count,
        };
        return (record, StreakChange::SameDay);
    }

    if previous.last_visit_date == today - Duration::days(1) {
        let record = StreakRecord {
            last_visit_date: today,
            count: count.saturating_add(1),
        };
        return (record, StreakChange::Extended);
    }

    (StreakRecord::first_visit(today), StreakChange::Restarted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn record(last: NaiveDate, count: u32) -> StreakRecord {
        StreakRecord {
            last_visit_date: last,
            count,
        }
    }

    #[test]
    fn test_first_visit() {
        let (next, change) = advance_streak(None, day(17));
        assert_eq!(next, record(day(17), 1));
        assert_eq!(change, StreakChange::Restarted);
    }

    #[test]
    fn test_same_day_is_a_no_op() {
        let (next, change) = advance_streak(Some(&record(day(17), 5)), day(17));
        assert_eq!(next, record(day(17), 5));
        assert_eq!(change, StreakChange::SameDay);
    }

    #[test]
    fn test_consecutive_day_extends() {
        let (next, change) = advance_streak(Some(&record(day(16), 3)), day(17));
        assert_eq!(next, record(day(17), 4));
        assert_eq!(change, StreakChange::Extended);
    }

    #[test]
    fn test_gap_restarts() {
        let (next, change) = advance_streak(Some(&record(day(14), 12)), day(17));
        assert_eq!(next, record(day(17), 1));
        assert_eq!(change, StreakChange::Restarted);
    }

    #[test]
    fn test_extends_across_month_boundary() {
        let sept_30 = NaiveDate::from_ymd_opt(2026, 9, 30).unwrap();
        let (next, _) = advance_streak(Some(&record(sept_30, 9)), day(1));
        assert_eq!(next.count, 10);
    }

    #[test]
    fn test_zero_count_reads_as_one() {
        let (next, change) = advance_streak(Some(&record(day(17), 0)), day(17));
        assert_eq!(next, record(day(17), 1));
        assert_eq!(change, StreakChange::SameDay);

        let (next, _) = advance_streak(Some(&record(day(16), 0)), day(17));
        assert_eq!(next.count, 2);
    }

    #[test]
    fn test_max_count_does_not_overflow() {
        let (next, change) = advance_streak(Some(&record(day(16), u32::MAX)), day(17));
        assert_eq!(next, record(day(17), u32::MAX));
        assert_eq!(change, StreakChange::Extended);
    }

    #[test]
    fn test_future_last_visit_restarts() {
        let (next, change) = advance_streak(Some(&record(day(20), 8)), day(17));
        assert_eq!(next, record(day(17), 1));
        assert_eq!(change, StreakChange::Restarted);
    }
}
