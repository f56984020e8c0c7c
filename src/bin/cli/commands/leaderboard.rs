use anyhow::Result;
use chrono::Local;

use crate::app::App;
use crate::render::terminal::{pad, paint, Color};
use crate::OutputFormat;

pub fn run_show(app: &App, game: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let scores = app.trainer.leaderboard().scores(game);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&scores)?);
        }
        OutputFormat::Plain => {
            if scores.is_empty() {
                println!("No scores for '{}' yet.", game);
                return Ok(());
            }

            let name_width = scores.iter().map(|e| e.player_name.chars().count()).max().unwrap_or(4);

            for (i, entry) in scores.iter().enumerate() {
                let rank = format!("{:>2}.", i + 1);
                let rank = match i {
                    0 => paint(&rank, Color::YELLOW, use_color),
                    _ => rank,
                };
                println!(
                    "{} {} {:>7.1}s  {}",
                    rank,
                    pad(&entry.player_name, name_width),
                    entry.elapsed_seconds,
                    paint(
                        &entry.timestamp.with_timezone(&Local).format("%Y-%m-%d").to_string(),
                        Color::GRAY,
                        use_color
                    ),
                );
            }
        }
    }

    Ok(())
}

pub fn run_add(app: &App, game: &str, seconds: f64, format: &OutputFormat, _use_color: bool) -> Result<()> {
    let board = app.trainer.leaderboard();
    let rank = board.add_score(game, seconds);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "game": game,
                "elapsedSeconds": seconds,
                "playerName": board.player_name(),
                "rank": rank,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => match rank {
            Some(rank) => println!("Ranked #{} on '{}'", rank, game),
            None => println!("Not added to '{}'", game),
        },
    }

    Ok(())
}

pub fn run_name(app: &App, name: Option<&str>, format: &OutputFormat, _use_color: bool) -> Result<()> {
    let board = app.trainer.leaderboard();

    if let Some(name) = name {
        if !board.set_player_name(name) {
            anyhow::bail!("Name not saved: it must not be empty");
        }
    }

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "playerName": board.player_name(),
                "custom": board.has_player_name(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{}", board.player_name());
        }
    }

    Ok(())
}
