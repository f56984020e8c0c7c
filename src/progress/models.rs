//! Streak, activity and trophy data models

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::review::ReviewProgress;

/// Consecutive-day visit counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakRecord {
    /// Calendar day of the last counted visit (YYYY-MM-DD)
    pub last_visit_date: NaiveDate,
    /// Always >= 1
    pub count: u32,
}

impl StreakRecord {
    pub fn first_visit(today: NaiveDate) -> Self {
        Self {
            last_visit_date: today,
            count: 1,
        }
    }
}

/// Something an exercise reported on completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActivityEvent {
    /// A quiz round ended
    QuizCompleted {
        score: u32,
        total: u32,
        /// Difficulty level 1-3
        level: u8,
        /// Whether the quiz was a review session built from due items
        #[serde(default)]
        review_session: bool,
    },
    /// A hangman word was found
    HangmanWon { errors: u32 },
    /// All pairs of a matching round were found
    MatchingCompleted { elapsed_seconds: f64 },
    /// The review scheduler saved new mastery data
    ReviewProgressUpdated { progress: ReviewProgress },
}

/// Exercise views counted toward the explorer trophy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExerciseView {
    Focus,
    Quiz,
    FillBlanks,
    Hangman,
    Review,
}

impl ExerciseView {
    pub const ALL: [ExerciseView; 5] = [
        ExerciseView::Focus,
        ExerciseView::Quiz,
        ExerciseView::FillBlanks,
        ExerciseView::Hangman,
        ExerciseView::Review,
    ];

    /// Name stored in `distinct-views-visited`
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseView::Focus => "focus",
            ExerciseView::Quiz => "quiz",
            ExerciseView::FillBlanks => "fill-blanks",
            ExerciseView::Hangman => "hangman",
            ExerciseView::Review => "srs",
        }
    }
}

impl fmt::Display for ExerciseView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for view names that are not exercises (e.g. "list", "trophies")
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not an exercise view: {0}")]
pub struct NotAnExercise(pub String);

impl FromStr for ExerciseView {
    type Err = NotAnExercise;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "focus" | "flashcards" => Ok(ExerciseView::Focus),
            "quiz" => Ok(ExerciseView::Quiz),
            "fill-blanks" | "sentences" => Ok(ExerciseView::FillBlanks),
            "hangman" => Ok(ExerciseView::Hangman),
            "srs" | "review" => Ok(ExerciseView::Review),
            _ => Err(NotAnExercise(s.to_string())),
        }
    }
}

/// Descriptive record of an achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trophy {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// A trophy with its unlock state, for the trophies page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrophyStatus {
    #[serde(flatten)]
    pub trophy: Trophy,
    pub unlocked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_aliases() {
        assert_eq!("flashcards".parse::<ExerciseView>(), Ok(ExerciseView::Focus));
        assert_eq!("Sentences".parse::<ExerciseView>(), Ok(ExerciseView::FillBlanks));
        assert_eq!("review".parse::<ExerciseView>(), Ok(ExerciseView::Review));
        assert_eq!(" srs ".parse::<ExerciseView>(), Ok(ExerciseView::Review));
        assert!("trophies".parse::<ExerciseView>().is_err());
        assert!("list".parse::<ExerciseView>().is_err());
    }

    #[test]
    fn test_view_names_round_trip() {
        for view in ExerciseView::ALL {
            assert_eq!(view.as_str().parse::<ExerciseView>(), Ok(view));
        }
    }

    #[test]
    fn test_activity_event_json_shape() {
        let event: ActivityEvent =
            serde_json::from_str(r#"{"type":"quiz_completed","score":10,"total":10,"level":2}"#).unwrap();
        assert_eq!(
            event,
            ActivityEvent::QuizCompleted {
                score: 10,
                total: 10,
                level: 2,
                review_session: false,
            }
        );

        let event: ActivityEvent = serde_json::from_str(r#"{"type":"hangman_won","errors":2}"#).unwrap();
        assert_eq!(event, ActivityEvent::HangmanWon { errors: 2 });
    }

    #[test]
    fn test_streak_record_json_shape() {
        let record = StreakRecord {
            last_visit_date: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
            count: 4,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["lastVisitDate"], "2026-10-17");
        assert_eq!(json["count"], 4);
    }
}
