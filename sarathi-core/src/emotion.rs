//! Single-label emotion tagging from a flat keyword table.
//!
//! Simpler than the problem matcher by design: only lower-casing and
//! curly-apostrophe unification, no phrase weighting, no substring fallback.
//! Every keyword counts at weight 1.0 via word-boundary occurrence counting.

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Label assigned when no keyword matches at all. Distinct from the
/// lexicon's own "neutral" entry, which is only reachable through an actual
/// keyword hit.
pub const CONFUSION_LABEL: &str = "confusion";

const DEFAULT_LABEL: &str = "neutral";

/// One emotion label with its keyword list (words and short phrases).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmotionEntry {
    pub label: String,
    pub keywords: Vec<String>,
}

/// Ordered, immutable emotion keyword table. Label order is the tie-break
/// priority: an earlier label keeps the win unless a later one scores
/// strictly higher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmotionLexicon(Vec<EmotionEntry>);

impl EmotionLexicon {
    pub fn new(entries: Vec<EmotionEntry>) -> Self {
        Self(entries)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<EmotionEntry> = serde_json::from_str(json)?;
        Ok(Self(entries))
    }

    pub fn entries(&self) -> &[EmotionEntry] {
        &self.0
    }
}

/// A single-label reading. The confidence is derived, not a probability:
/// bounded to [0.4, 0.95] and non-decreasing in both keyword-match strength
/// and input length.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmotionReading {
    pub label: String,
    pub confidence: f64,
}

/// Classifier over an immutable lexicon with word-boundary patterns
/// compiled once at construction.
pub struct EmotionClassifier {
    lexicon: EmotionLexicon,
    compiled: Vec<Vec<Regex>>,
}

impl EmotionClassifier {
    pub fn new(lexicon: EmotionLexicon) -> Result<Self> {
        let mut compiled = Vec::with_capacity(lexicon.entries().len());
        for entry in lexicon.entries() {
            let mut patterns = Vec::with_capacity(entry.keywords.len());
            for kw in &entry.keywords {
                let escaped = regex::escape(&kw.to_lowercase().replace('\u{2019}', "'"));
                patterns.push(Regex::new(&format!(r"\b{escaped}\b"))?);
            }
            compiled.push(patterns);
        }
        Ok(Self { lexicon, compiled })
    }

    pub fn lexicon(&self) -> &EmotionLexicon {
        &self.lexicon
    }

    /// Tag free text with its strongest emotion label.
    ///
    /// Total over all inputs: zero matches anywhere yields the confusion
    /// fallback with the length-only confidence floor.
    pub fn classify(&self, text: &str) -> EmotionReading {
        let lowered = text.to_lowercase().replace('\u{2019}', "'");

        let mut best_label = DEFAULT_LABEL;
        let mut max_score = 0usize;
        for (entry, patterns) in self.lexicon.entries().iter().zip(&self.compiled) {
            let score: usize = patterns.iter().map(|p| p.find_iter(&lowered).count()).sum();
            // Strict comparison: earlier labels retain priority on ties.
            if score > max_score {
                max_score = score;
                best_label = &entry.label;
            }
        }

        let label = if max_score == 0 { CONFUSION_LABEL } else { best_label };
        EmotionReading {
            label: label.to_string(),
            confidence: confidence(max_score, text),
        }
    }
}

/// Derived confidence: `min(0.95, 0.4 + score*0.2)` plus a length bonus of
/// `min(0.3, words*0.02)`, capped again at 0.95. Word count is taken from
/// the original input, not the normalized form.
fn confidence(max_score: usize, text: &str) -> f64 {
    let base = (0.4 + max_score as f64 * 0.2).min(0.95);
    let words = text.split_whitespace().count();
    let length_bonus = (words as f64 * 0.02).min(0.3);
    (base + length_bonus).min(0.95)
}
