use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use werkwoord_lib::storage::settings::resolve_data_dir;
use werkwoord_lib::{Trainer, Verb};

use crate::render::terminal::{paint, trophy_line, Color};

/// Shared application state for CLI commands
pub struct App {
    pub data_dir: PathBuf,
    pub trainer: Trainer,
}

impl App {
    /// Open the trainer data, announce unlocks on stderr and count today's visit
    pub fn new(data_dir: Option<PathBuf>, use_color: bool) -> Result<Self> {
        let data_dir = resolve_data_dir(data_dir).context("Failed to get data directory")?;

        let trainer = Trainer::open(&data_dir)
            .with_context(|| format!("Failed to open trainer data in {}", data_dir.display()))?;

        trainer.on_trophy_unlocked(move |trophy| {
            eprintln!(
                "{} {}",
                paint("Trophée débloqué !", Color::YELLOW, use_color),
                trophy_line(trophy, true, use_color)
            );
        });
        trainer.start_visit();

        Ok(Self { data_dir, trainer })
    }

    /// Find a verb by infinitive (case-insensitive, then unique prefix)
    pub fn find_verb(&self, name: &str) -> Result<&Verb> {
        let catalog = self.trainer.catalog();
        if let Some(verb) = catalog.find(name) {
            return Ok(verb);
        }

        let name_lower = name.trim().to_lowercase();
        let matches: Vec<&Verb> = catalog
            .verbs()
            .iter()
            .filter(|v| v.infinitive.to_lowercase().starts_with(&name_lower))
            .collect();

        match matches.len() {
            0 => bail!("No verb matching '{}'", name),
            1 => Ok(matches[0]),
            _ => bail!(
                "Ambiguous verb '{}'. Matches:\n{}",
                name,
                matches
                    .iter()
                    .map(|v| format!("  - {}", v.infinitive))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
        }
    }

    /// Verbs of the given 1-based series, or the whole catalog
    pub fn verb_pool(&self, series: &[usize]) -> Result<Vec<Verb>> {
        let catalog = self.trainer.catalog();
        if series.is_empty() {
            return Ok(catalog.verbs().to_vec());
        }

        let size = self.trainer.settings().series_size;
        let count = catalog.series(size).len();

        let mut indices = Vec::with_capacity(series.len());
        for number in series {
            if *number == 0 || *number > count {
                bail!("Series {} does not exist (1-{})", number, count);
            }
            indices.push(number - 1);
        }

        Ok(catalog.select_series(size, &indices))
    }
}
