//! sarathi-lexicon: the embedded problem catalog and emotion keyword table.
//!
//! The catalogs are authored as JSON, compiled into the binary, parsed once
//! at startup, and read-only for the process lifetime. Malformed data is a
//! construction-time error for the host, never a runtime classification
//! condition.

use anyhow::Result;
use sarathi_core::{EmotionClassifier, EmotionLexicon, ProblemCatalog, ProblemMatcher};

const PROBLEMS_JSON: &str = include_str!("../data/problems.json");
const EMOTIONS_JSON: &str = include_str!("../data/emotions.json");

/// Parse the embedded problem catalog.
///
/// Entries keep their authored order, including rows that share an id;
/// the matcher scores and ranks those independently, and order is the
/// tie-break key.
pub fn problem_catalog() -> Result<ProblemCatalog> {
    ProblemCatalog::from_json(PROBLEMS_JSON)
}

/// Parse the embedded emotion keyword table, in priority order
/// (joy first, neutral last).
pub fn emotion_lexicon() -> Result<EmotionLexicon> {
    EmotionLexicon::from_json(EMOTIONS_JSON)
}

/// A ready problem matcher over the embedded catalog, patterns precompiled.
pub fn problem_matcher() -> Result<ProblemMatcher> {
    ProblemMatcher::new(problem_catalog()?)
}

/// A ready emotion classifier over the embedded table.
pub fn emotion_classifier() -> Result<EmotionClassifier> {
    EmotionClassifier::new(emotion_lexicon()?)
}
