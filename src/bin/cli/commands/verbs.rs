use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{mastery_bar, pad, paint, Color};
use crate::OutputFormat;

pub fn run(app: &App, series: &[usize], format: &OutputFormat, use_color: bool) -> Result<()> {
    let pool = app.verb_pool(series)?;
    let progress = app.trainer.scheduler().progress();

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = pool
                .iter()
                .map(|verb| {
                    let item = progress.get(&verb.infinitive);
                    serde_json::json!({
                        "fr": verb.fr,
                        "infinitive": verb.infinitive,
                        "preterite": verb.preterite,
                        "participle": verb.participle,
                        "masteryLevel": item.map_or(0, |i| i.mastery_level),
                        "nextReview": item.map(|i| i.next_review.to_rfc3339()),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if pool.is_empty() {
                println!("No verbs.");
                return Ok(());
            }

            let fr_width = pool.iter().map(|v| v.fr.chars().count()).max().unwrap_or(6).max(6);
            let inf_width = pool.iter().map(|v| v.infinitive.chars().count()).max().unwrap_or(10);
            let pret_width = pool.iter().map(|v| v.preterite.chars().count()).max().unwrap_or(9);

            for (i, verb) in pool.iter().enumerate() {
                let size = app.trainer.settings().series_size.max(1);
                if series.is_empty() && i % size == 0 {
                    if i > 0 {
                        println!();
                    }
                    println!("{}", paint(&format!("Série {}", i / size + 1), Color::BOLD, use_color));
                }

                let level = progress.get(&verb.infinitive).map_or(0, |item| item.mastery_level);
                println!(
                    "  {} {} {} {} {}",
                    pad(&verb.fr, fr_width),
                    paint(&pad(&verb.infinitive, inf_width), Color::CYAN, use_color),
                    pad(&verb.preterite, pret_width),
                    verb.participle,
                    mastery_bar(level, use_color),
                );
            }

            println!("\n{} verbs", pool.len());
        }
    }

    Ok(())
}
