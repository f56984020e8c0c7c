mod app;
mod commands;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use werkwoord_lib::ActivityEvent;

#[derive(Parser)]
#[command(name = "werkwoord-cli", about = "Dutch irregular verb trainer", version)]
struct Cli {
    /// Data directory (default: $WERKWOORD_DATA_DIR, then the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// List verbs with their mastery
    Verbs {
        /// Only these series (1-based, repeatable)
        #[arg(long, short)]
        series: Vec<usize>,
    },

    /// Mastery overview, streak and trophy count
    Status {
        /// Only these series (1-based, repeatable)
        #[arg(long, short)]
        series: Vec<usize>,
    },

    /// Check an answer and reschedule the verb
    Answer {
        /// Infinitive (case-insensitive prefix match)
        infinitive: String,
        /// Preterite, singular or plural
        preterite: String,
        /// Past participle ("-" for verbs without one)
        participle: String,
    },

    /// Verbs that are new or due, least mastered first
    Due {
        /// Only these series (1-based, repeatable)
        #[arg(long, short)]
        series: Vec<usize>,
        /// Maximum results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show the daily streak
    Streak,

    /// List all trophies and which are unlocked
    Trophies,

    /// Record that an exercise view was opened
    Visit {
        /// View name (focus, quiz, fill-blanks, hangman, srs)
        view: String,
    },

    /// Report a finished exercise
    #[command(subcommand)]
    Event(EventCommand),

    /// Fastest times per game
    #[command(subcommand)]
    Leaderboard(LeaderboardCommand),

    /// Show or set the leaderboard display name
    Name {
        /// New display name
        name: Option<String>,
    },
}

#[derive(Subcommand)]
enum EventCommand {
    /// A quiz round ended
    Quiz {
        #[arg(long)]
        score: u32,
        #[arg(long)]
        total: u32,
        /// Difficulty level 1-3
        #[arg(long, default_value = "1")]
        level: u8,
        /// The quiz was a review session
        #[arg(long)]
        review: bool,
    },

    /// A hangman word was found
    Hangman {
        #[arg(long)]
        errors: u32,
    },

    /// A matching round was completed
    Matching {
        /// Elapsed time in seconds
        #[arg(long)]
        seconds: f64,
        /// Display name to save before entering the leaderboard
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Subcommand)]
enum LeaderboardCommand {
    /// Show a game's leaderboard
    Show {
        #[arg(default_value = "matching")]
        game: String,
    },

    /// Add a time under the current display name
    Add {
        game: String,
        /// Elapsed time in seconds
        seconds: f64,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();

    let app = app::App::new(cli.data_dir, use_color)?;

    match cli.command {
        Command::Verbs { series } => {
            commands::verbs::run(&app, &series, &cli.format, use_color)?;
        }
        Command::Status { series } => {
            commands::review::run_status(&app, &series, &cli.format, use_color)?;
        }
        Command::Answer {
            infinitive,
            preterite,
            participle,
        } => {
            commands::review::run_answer(&app, &infinitive, &preterite, &participle, &cli.format, use_color)?;
        }
        Command::Due { series, limit } => {
            commands::review::run_due(&app, &series, limit, &cli.format, use_color)?;
        }
        Command::Streak => {
            commands::progress::run_streak(&app, &cli.format, use_color)?;
        }
        Command::Trophies => {
            commands::progress::run_trophies(&app, &cli.format, use_color)?;
        }
        Command::Visit { view } => {
            commands::progress::run_visit(&app, &view, &cli.format, use_color)?;
        }
        Command::Event(subcmd) => match subcmd {
            EventCommand::Quiz {
                score,
                total,
                level,
                review,
            } => {
                let event = ActivityEvent::QuizCompleted {
                    score,
                    total,
                    level,
                    review_session: review,
                };
                commands::progress::run_event(&app, &event, &cli.format, use_color)?;
            }
            EventCommand::Hangman { errors } => {
                let event = ActivityEvent::HangmanWon { errors };
                commands::progress::run_event(&app, &event, &cli.format, use_color)?;
            }
            EventCommand::Matching { seconds, name } => {
                commands::progress::run_matching(&app, seconds, name.as_deref(), &cli.format, use_color)?;
            }
        },
        Command::Leaderboard(subcmd) => match subcmd {
            LeaderboardCommand::Show { game } => {
                commands::leaderboard::run_show(&app, &game, &cli.format, use_color)?;
            }
            LeaderboardCommand::Add { game, seconds } => {
                commands::leaderboard::run_add(&app, &game, seconds, &cli.format, use_color)?;
            }
        },
        Command::Name { name } => {
            commands::leaderboard::run_name(&app, name.as_deref(), &cli.format, use_color)?;
        }
    }

    Ok(())
}
