//! Irregular verb catalog

pub mod catalog;

pub use catalog::{answer_matches, Verb, VerbCatalog, MISSING_FORM};
