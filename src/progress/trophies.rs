//! Trophy catalog and unlock conditions
//!
//! Conditions are pure functions of an event payload (or a streak count);
//! the tracker decides which of the returned ids are new.

use super::models::{ActivityEvent, Trophy};

pub const FIRST_QUIZ: &str = "first_quiz";
pub const EXPLORER: &str = "explorer";
pub const PERFECT_SCORE: &str = "perfect_score";
pub const HANGMAN_ACE: &str = "hangman_ace";
pub const MASTERY_APPRENTICE: &str = "mastery_apprentice";
pub const MASTERY_MASTER: &str = "mastery_master";
pub const MARATHON_RUNNER: &str = "marathon_runner";
pub const STREAK_7: &str = "streak_7";
pub const STREAK_30: &str = "streak_30";
pub const LIGHTNING_MATCH: &str = "lightning_match";

/// Distinct exercise views needed for the explorer trophy
pub const EXPLORER_VIEW_COUNT: usize = 5;
/// Lowest quiz level where a perfect score counts
pub const PERFECT_SCORE_MIN_LEVEL: u8 = 2;
/// Review session length for the marathon trophy
pub const MARATHON_MIN_QUESTIONS: u32 = 30;
/// Hangman wins need fewer errors than this
pub const HANGMAN_ACE_MAX_ERRORS: u32 = 4;
/// Matching rounds finished within this many seconds
pub const LIGHTNING_MATCH_SECONDS: f64 = 60.0;

/// (minimum mastery level, items needed, trophy)
const MASTERY_MILESTONES: [(u8, usize, &str); 2] = [
    (3, 10, MASTERY_APPRENTICE),
    (5, 25, MASTERY_MASTER),
];

/// (streak days, trophy)
const STREAK_MILESTONES: [(u32, &str); 2] = [(7, STREAK_7), (30, STREAK_30)];

pub static ALL_TROPHIES: &[Trophy] = &[
    Trophy {
        id: FIRST_QUIZ,
        name: "L'Initié",
        description: "Termine ton premier quiz.",
        icon: "🎓",
    },
    Trophy {
        id: EXPLORER,
        name: "L'Explorateur",
        description: "Essaie chaque type d'exercice.",
        icon: "🧭",
    },
    Trophy {
        id: PERFECT_SCORE,
        name: "Score Parfait",
        description: "Obtiens 100% à un quiz de niveau 2 ou 3.",
        icon: "⭐",
    },
    Trophy {
        id: HANGMAN_ACE,
        name: "As du Pendu",
        description: "Gagne au Pendu avec moins de 4 erreurs.",
        icon: "🧠",
    },
    Trophy {
        id: MASTERY_APPRENTICE,
        name: "Apprenti Maître",
        description: "Atteins le niveau de maîtrise 3 pour 10 verbes.",
        icon: "💪",
    },
    Trophy {
        id: MASTERY_MASTER,
        name: "Maître des Verbes",
        description: "Atteins le niveau de maîtrise 5 pour 25 verbes.",
        icon: "👑",
    },
    Trophy {
        id: MARATHON_RUNNER,
        name: "Le Marathonien",
        description: "Termine une session d'Évaluation de 30 verbes ou plus.",
        icon: "🏃",
    },
    Trophy {
        id: STREAK_7,
        name: "Série de Feu",
        description: "Maintiens une série de pratique de 7 jours.",
        icon: "🔥",
    },
    Trophy {
        id: STREAK_30,
        name: "Série Infernale",
        description: "Maintiens une série de 30 jours.",
        icon: "🌋",
    },
    Trophy {
        id: LIGHTNING_MATCH,
        name: "Éclair",
        description: "Termine le jeu d'association en moins d'une minute.",
        icon: "⚡",
    },
];

/// Look up a trophy by id
pub fn find_trophy(id: &str) -> Option<&'static Trophy> {
    ALL_TROPHIES.iter().find(|t| t.id == id)
}

/// Trophies whose condition the event satisfies (already unlocked or not)
pub fn earned_by(event: &ActivityEvent) -> Vec<&'static str> {
    let mut earned = Vec::new();

    match event {
        ActivityEvent::QuizCompleted {
            score,
            total,
            level,
            review_session,
        } => {
            earned.push(FIRST_QUIZ);
            if *review_session && *total >= MARATHON_MIN_QUESTIONS {
                earned.push(MARATHON_RUNNER);
            }
            if score == total && *level >= PERFECT_SCORE_MIN_LEVEL {
                earned.push(PERFECT_SCORE);
            }
        }
        ActivityEvent::HangmanWon { errors } => {
            if *errors < HANGMAN_ACE_MAX_ERRORS {
                earned.push(HANGMAN_ACE);
            }
        }
        ActivityEvent::MatchingCompleted { elapsed_seconds } => {
            if *elapsed_seconds > 0.0 && *elapsed_seconds <= LIGHTNING_MATCH_SECONDS {
                earned.push(LIGHTNING_MATCH);
            }
        }
        ActivityEvent::ReviewProgressUpdated { progress } => {
            for (min_level, needed, trophy) in MASTERY_MILESTONES {
                let reached = progress
                    .values()
                    .filter(|item| item.mastery_level >= min_level)
                    .count();
                if reached >= needed {
                    earned.push(trophy);
                }
            }
        }
    }

    earned
}

/// Streak trophies reached at `count` days
pub fn earned_by_streak(count: u32) -> Vec<&'static str> {
    STREAK_MILESTONES
        .iter()
        .filter(|(days, _)| count >= *days)
        .map(|(_, trophy)| *trophy)
        .collect()
}
