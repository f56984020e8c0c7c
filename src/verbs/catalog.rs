//! Built-in irregular verb list
//!
//! Source format, one verb per line:
//! ```text
//! french gloss,infinitive / preterite singular/plural / participle
//! ```
//! A participle of `/` means the verb has none in common use (modal verbs).

use serde::{Deserialize, Serialize};

use crate::review::ReviewKey;

const BUILTIN_VERBS: &str = include_str!("irregular_verbs.csv");

/// Placeholder for a missing form
pub const MISSING_FORM: &str = "-";

/// A Dutch irregular verb with its French gloss
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verb {
    pub fr: String,
    pub infinitive: String,
    /// Singular and plural preterite, slash-separated
    pub preterite: String,
    pub participle: String,
}

impl Verb {
    /// Parse one line of the source format
    pub fn parse_line(line: &str) -> Option<Self> {
        let (fr, nl) = line.split_once(',')?;
        let mut chunks = nl.trim().split(" / ").map(str::trim);

        let mut next_form = || {
            chunks
                .next()
                .filter(|form| !form.is_empty())
                .unwrap_or(MISSING_FORM)
                .to_string()
        };

        let infinitive = next_form();
        let preterite = next_form();
        let participle = match next_form() {
            form if form == "/" => MISSING_FORM.to_string(),
            form => form,
        };

        Some(Self {
            fr: fr.trim().to_string(),
            infinitive,
            preterite,
            participle,
        })
    }

    pub fn has_participle(&self) -> bool {
        self.participle != MISSING_FORM
    }
}

impl ReviewKey for Verb {
    fn review_key(&self) -> &str {
        &self.infinitive
    }
}

/// Whether `given` matches one of the `/`-separated alternatives of `expected`
pub fn answer_matches(expected: &str, given: &str) -> bool {
    let given = given.trim().to_lowercase();
    if given.is_empty() {
        return false;
    }
    expected
        .split('/')
        .map(|alternative| alternative.trim().to_lowercase())
        .any(|alternative| alternative == given)
}

/// Ordered collection of verbs
#[derive(Debug, Clone, Default)]
pub struct VerbCatalog {
    verbs: Vec<Verb>,
}

impl VerbCatalog {
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_VERBS)
    }

    /// Parse the source format, skipping blank and malformed lines
    pub fn parse(text: &str) -> Self {
        let verbs = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(number, line)| {
                let verb = Verb::parse_line(line);
                if verb.is_none() {
                    log::warn!("Skipping malformed verb line {}: {:?}", number + 1, line);
                }
                verb
            })
            .collect();

        Self { verbs }
    }

    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Case-insensitive lookup by infinitive
    pub fn find(&self, infinitive: &str) -> Option<&Verb> {
        let wanted = infinitive.trim().to_lowercase();
        self.verbs.iter().find(|v| v.infinitive.to_lowercase() == wanted)
    }

    /// Consecutive chunks of `size` verbs; the last one may be shorter
    pub fn series(&self, size: usize) -> Vec<&[Verb]> {
        if size == 0 {
            return Vec::new();
        }
        self.verbs.chunks(size).collect()
    }

    /// Verbs of the selected series, in catalog order. Out-of-range indices are skipped.
    pub fn select_series(&self, size: usize, indices: &[usize]) -> Vec<Verb> {
        let series = self.series(size);
        let mut indices = indices.to_vec();
        indices.sort_unstable();
        indices.dedup();

        indices
            .into_iter()
            .filter_map(|i| series.get(i))
            .flat_map(|chunk| chunk.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = VerbCatalog::builtin();
        assert_eq!(catalog.len(), 95);

        let first = &catalog.verbs()[0];
        assert_eq!(first.fr, "cuire");
        assert_eq!(first.infinitive, "bakken");
        assert_eq!(first.preterite, "bakte/bakten");
        assert_eq!(first.participle, "gebakken");
    }

    #[test]
    fn test_infinitives_are_unique() {
        let catalog = VerbCatalog::builtin();
        for verb in catalog.verbs() {
            let same = catalog
                .verbs()
                .iter()
                .filter(|v| v.infinitive == verb.infinitive)
                .count();
            assert_eq!(same, 1, "duplicate infinitive {}", verb.infinitive);
        }
    }

    #[test]
    fn test_modal_verb_has_no_participle() {
        let catalog = VerbCatalog::builtin();
        let kunnen = catalog.find("kunnen").unwrap();
        assert_eq!(kunnen.fr, "pouvoir (capacité)");
        assert_eq!(kunnen.participle, MISSING_FORM);
        assert!(!kunnen.has_participle());
    }

    #[test]
    fn test_parse_line_variants() {
        let verb = Verb::parse_line("aller,gaan / ging/gingen / gegaan zijn").unwrap();
        assert_eq!(verb.participle, "gegaan zijn");

        let verb = Verb::parse_line("faire/mettre,doen / deed/deden / gedaan").unwrap();
        assert_eq!(verb.fr, "faire/mettre");
        assert_eq!(verb.infinitive, "doen");

        let verb = Verb::parse_line("incomplet,lopen").unwrap();
        assert_eq!(verb.preterite, MISSING_FORM);
        assert_eq!(verb.participle, MISSING_FORM);

        assert!(Verb::parse_line("no comma here").is_none());
    }

    #[test]
    fn test_parse_skips_bad_lines() {
        let catalog = VerbCatalog::parse("\nlire,lezen / las/lazen / gelezen\nbroken line\n\n");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find("LEZEN").unwrap().fr, "lire");
    }

    #[test]
    fn test_series_chunks() {
        let catalog = VerbCatalog::builtin();
        let series = catalog.series(10);
        assert_eq!(series.len(), 10);
        assert_eq!(series[0].len(), 10);
        assert_eq!(series[9].len(), 5);
        assert!(catalog.series(0).is_empty());
    }

    #[test]
    fn test_select_series() {
        let catalog = VerbCatalog::builtin();
        let selected = catalog.select_series(10, &[1, 0, 1, 40]);
        assert_eq!(selected.len(), 20);
        assert_eq!(selected[0].infinitive, "bakken");
        assert_eq!(selected[10], catalog.verbs()[10]);
    }

    #[test]
    fn test_answer_matches() {
        assert!(answer_matches("bakte/bakten", "bakte"));
        assert!(answer_matches("bakte/bakten", "  Bakten "));
        assert!(answer_matches("wilde/wou/wouden", "wou"));
        assert!(!answer_matches("bakte/bakten", "bakt"));
        assert!(!answer_matches("bakte/bakten", ""));
        assert!(answer_matches("gegaan zijn", "gegaan zijn"));
    }

    #[test]
    fn test_verb_review_key() {
        let catalog = VerbCatalog::builtin();
        assert_eq!(catalog.find("lopen").unwrap().review_key(), "lopen");
    }
}
