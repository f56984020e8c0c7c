use anyhow::Result;
use chrono::Local;

use werkwoord_lib::review::algorithm::{format_interval, interval_days};
use werkwoord_lib::verbs::answer_matches;

use crate::app::App;
use crate::render::terminal::{mastery_bar, paint, Color};
use crate::OutputFormat;

pub fn run_status(app: &App, series: &[usize], format: &OutputFormat, use_color: bool) -> Result<()> {
    let pool = app.verb_pool(series)?;
    let summary = app.trainer.scheduler().mastery_summary(&pool);
    let streak = app.trainer.tracker().current_streak();
    let unlocked = app.trainer.tracker().unlocked_trophies().len();
    let board = app.trainer.tracker().trophy_board();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "mastery": summary,
                "streak": streak,
                "trophiesUnlocked": unlocked,
                "trophiesTotal": board.len(),
                "dataDir": app.data_dir.display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{} verbs, {} new, {} due", summary.total, summary.new_items, summary.due_items);
            println!();
            for (level, count) in summary.by_level.iter().enumerate() {
                println!("  {} {:>3}", mastery_bar(level as u8, use_color), count);
            }
            println!();
            println!("Streak: {} day(s)", streak);
            println!("Trophies: {}/{}", unlocked, board.len());
            println!("{}", paint(&format!("Data: {}", app.data_dir.display()), Color::GRAY, use_color));
        }
    }

    Ok(())
}

pub fn run_answer(
    app: &App,
    infinitive: &str,
    preterite: &str,
    participle: &str,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let verb = app.find_verb(infinitive)?;
    let preterite_ok = answer_matches(&verb.preterite, preterite);
    let participle_ok = answer_matches(&verb.participle, participle);
    let correct = preterite_ok && participle_ok;

    let item = app.trainer.scheduler().record_outcome(&verb.infinitive, correct);
    let days = interval_days(item.mastery_level);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "infinitive": verb.infinitive,
                "correct": correct,
                "preteriteCorrect": preterite_ok,
                "participleCorrect": participle_ok,
                "expected": {
                    "preterite": verb.preterite,
                    "participle": verb.participle,
                },
                "masteryLevel": item.mastery_level,
                "nextReview": item.next_review.to_rfc3339(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if correct {
                println!("{} {}", paint("Correct !", Color::GREEN, use_color), verb.infinitive);
            } else {
                println!("{} {} ({})", paint("Raté.", Color::RED, use_color), verb.infinitive, verb.fr);
                println!("  {} / {}", verb.preterite, verb.participle);
            }
            println!(
                "  {} next review {} (in {})",
                mastery_bar(item.mastery_level, use_color),
                item.next_review.with_timezone(&Local).format("%Y-%m-%d"),
                format_interval(days)
            );
        }
    }

    Ok(())
}

pub fn run_due(
    app: &App,
    series: &[usize],
    limit: Option<usize>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let pool = app.verb_pool(series)?;
    let scheduler = app.trainer.scheduler();
    let progress = scheduler.progress();

    let mut due = scheduler.due_items(&pool);
    if let Some(limit) = limit {
        due.truncate(limit);
    }

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = due
                .iter()
                .map(|verb| {
                    serde_json::json!({
                        "fr": verb.fr,
                        "infinitive": verb.infinitive,
                        "masteryLevel": progress.get(&verb.infinitive).map_or(0, |i| i.mastery_level),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if due.is_empty() {
                println!("Nothing to review. Come back tomorrow!");
                return Ok(());
            }

            for verb in &due {
                let level = progress.get(&verb.infinitive).map_or(0, |i| i.mastery_level);
                println!("  {} {} ({})", mastery_bar(level, use_color), verb.infinitive, verb.fr);
            }
            println!("\n{} due", due.len());
        }
    }

    Ok(())
}
