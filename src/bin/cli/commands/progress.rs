use anyhow::{bail, Result};

use werkwoord_lib::progress::ExerciseView;
use werkwoord_lib::{ActivityEvent, Trophy};

use crate::app::App;
use crate::render::terminal::{paint, trophy_line, Color};
use crate::OutputFormat;

pub fn run_streak(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let tracker = app.trainer.tracker();
    let count = tracker.current_streak();
    let record = tracker.streak_record();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "count": count,
                "lastVisitDate": record.map(|r| r.last_visit_date.to_string()),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let days = if count == 1 { "jour" } else { "jours" };
            println!("\u{1f525} {}", paint(&format!("{} {}", count, days), Color::BOLD, use_color));
        }
    }

    Ok(())
}

pub fn run_trophies(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let board = app.trainer.tracker().trophy_board();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&board)?);
        }
        OutputFormat::Plain => {
            for status in &board {
                println!("  {}", trophy_line(&status.trophy, status.unlocked, use_color));
            }
            let unlocked = board.iter().filter(|s| s.unlocked).count();
            println!("\n{}/{} unlocked", unlocked, board.len());
        }
    }

    Ok(())
}

pub fn run_visit(app: &App, view: &str, format: &OutputFormat, _use_color: bool) -> Result<()> {
    let tracker = app.trainer.tracker();
    let counted = view.parse::<ExerciseView>().is_ok();
    let unlocked = tracker.record_view_visited(view);
    let visited = tracker.visited_views();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "view": view,
                "counted": counted,
                "visited": visited.iter().map(|v| v.as_str()).collect::<Vec<_>>(),
                "unlocked": ids(&unlocked),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if !counted {
                println!("'{}' is not an exercise view, not counted.", view);
            }
            println!(
                "Exercises visited: {}/{}",
                visited.len(),
                ExerciseView::ALL.len()
            );
        }
    }

    Ok(())
}

pub fn run_event(app: &App, event: &ActivityEvent, format: &OutputFormat, _use_color: bool) -> Result<()> {
    let unlocked = app.trainer.tracker().record_activity(event);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "event": event,
                "unlocked": ids(&unlocked),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Recorded. {} new trophy(ies).", unlocked.len());
        }
    }

    Ok(())
}

/// A finished matching round: trophies, then the leaderboard once the player has a name
pub fn run_matching(
    app: &App,
    seconds: f64,
    name: Option<&str>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let board = app.trainer.leaderboard();
    if let Some(name) = name {
        if !board.set_player_name(name) {
            bail!("Name not saved: it must not be empty");
        }
    }

    let event = ActivityEvent::MatchingCompleted {
        elapsed_seconds: seconds,
    };
    let unlocked = app.trainer.tracker().record_activity(&event);

    let rank = if board.has_player_name() {
        board.add_score("matching", seconds)
    } else {
        None
    };

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "event": event,
                "unlocked": ids(&unlocked),
                "playerName": board.player_name(),
                "rank": rank,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Temps : {:.1}s", seconds);
            match rank {
                Some(rank) => println!(
                    "{} #{} for {}",
                    paint("Leaderboard", Color::BOLD, use_color),
                    rank,
                    board.player_name()
                ),
                None if !board.has_player_name() => {
                    println!("Pick a name with --name to enter the leaderboard.")
                }
                None => println!("Not fast enough for the leaderboard this time."),
            }
        }
    }

    Ok(())
}

fn ids(trophies: &[Trophy]) -> Vec<&'static str> {
    trophies.iter().map(|t| t.id).collect()
}
