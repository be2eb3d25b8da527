//! Lexicon-based problem matcher.
//!
//! Scores free text against an ordered catalog of problem entries and
//! returns the best match with its guidance payload, or general guidance
//! when nothing clears the match threshold. Scoring is deterministic and
//! stateless: every call recomputes from the immutable catalog.

use std::cmp::Ordering;

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

/// Weight for a multi-word phrase keyword matched on word boundaries.
pub const PHRASE_WEIGHT: f64 = 2.2;
/// Weight for a single-token keyword matched on word boundaries.
pub const TOKEN_WEIGHT: f64 = 1.0;
/// Flat contribution when a keyword only appears as a raw substring
/// (at most once per keyword, regardless of occurrence count).
pub const SUBSTRING_WEIGHT: f64 = 0.5;
/// Minimum best score for a catalog match. Inclusive: a best score of
/// exactly 1.0 is a match, anything below falls back to general guidance.
pub const MATCH_THRESHOLD: f64 = 1.0;

/// One row of the problem catalog: detection keywords plus the guidance
/// payload returned verbatim when the row wins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProblemEntry {
    pub id: String,
    pub title: String,
    /// Single tokens and multi-word phrases. An empty list never scores.
    pub keywords: Vec<String>,
    pub shloka: String,
    pub reference: String,
    pub translation: String,
    pub practical_advice: String,
}

/// Ordered, immutable list of problem entries.
///
/// Deliberately a plain list, not a map keyed by id: the authored data
/// contains rows that share an id, and each one is scored and ranked
/// independently. Iteration order is the tie-break key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProblemCatalog(Vec<ProblemEntry>);

impl ProblemCatalog {
    pub fn new(entries: Vec<ProblemEntry>) -> Self {
        Self(entries)
    }

    /// Parse a catalog from JSON, preserving authored order.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<ProblemEntry> = serde_json::from_str(json)?;
        Ok(Self(entries))
    }

    pub fn entries(&self) -> &[ProblemEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Ephemeral per-call scoring record: index into the catalog plus the
/// computed score. Recomputed fully on every classification call.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub index: usize,
    pub score: f64,
}

/// Diagnostic candidate surfaced alongside a classification result.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Candidate {
    pub id: String,
    pub title: String,
    pub score: f64,
}

/// Outcome of classifying one piece of free text.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// Input normalized to nothing; no scoring was performed.
    EmptyInput,
    /// The best entry cleared the match threshold.
    Matched {
        entry: ProblemEntry,
        score: f64,
        /// Up to 5 ranked candidates for diagnostic display.
        candidates: Vec<Candidate>,
    },
    /// Nothing cleared the threshold.
    General {
        /// Up to 3 detected themes (entries that scored above zero), in
        /// ranked order. Empty when no entry scored at all.
        candidates: Vec<Candidate>,
    },
}

impl Classification {
    /// Stable result label: the matched entry id, "general" for the
    /// fallback, "neutral" for empty input.
    pub fn label(&self) -> &str {
        match self {
            Classification::EmptyInput => "neutral",
            Classification::Matched { entry, .. } => &entry.id,
            Classification::General { .. } => "general",
        }
    }
}

struct CompiledKeyword {
    normalized: String,
    boundary: Regex,
    weight: f64,
}

struct CompiledEntry {
    keywords: Vec<CompiledKeyword>,
}

/// Matcher over an immutable catalog with per-keyword patterns compiled
/// once at construction. Precompilation is a pure optimization: scoring is
/// identical to building each pattern per call.
pub struct ProblemMatcher {
    catalog: ProblemCatalog,
    compiled: Vec<CompiledEntry>,
}

impl ProblemMatcher {
    pub fn new(catalog: ProblemCatalog) -> Result<Self> {
        let mut compiled = Vec::with_capacity(catalog.len());
        for entry in catalog.entries() {
            // Longest keyword first by character length. The sort is stable,
            // so equal lengths keep their authored order; ordering does not
            // change the score (every keyword still contributes) but is part
            // of the contract for reproducibility.
            let mut ordered: Vec<&String> = entry.keywords.iter().collect();
            ordered.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

            let mut keywords = Vec::with_capacity(ordered.len());
            for kw in ordered {
                let normalized = normalize(kw);
                if normalized.is_empty() {
                    continue;
                }
                let boundary = Regex::new(&format!(r"\b{}\b", regex::escape(&normalized)))?;
                let weight = if normalized.contains(' ') {
                    PHRASE_WEIGHT
                } else {
                    TOKEN_WEIGHT
                };
                keywords.push(CompiledKeyword {
                    normalized,
                    boundary,
                    weight,
                });
            }
            compiled.push(CompiledEntry { keywords });
        }
        Ok(Self { catalog, compiled })
    }

    pub fn catalog(&self) -> &ProblemCatalog {
        &self.catalog
    }

    /// Score every catalog entry against `text`, in catalog order.
    ///
    /// Per keyword: count all non-overlapping word-boundary occurrences in
    /// the normalized, space-padded text and add `count * weight`; if there
    /// is no boundary hit but the keyword occurs as a raw substring, add the
    /// flat substring weight once.
    pub fn scores(&self, text: &str) -> Vec<ScoredCandidate> {
        let padded = format!(" {} ", normalize(text));
        self.compiled
            .iter()
            .enumerate()
            .map(|(index, entry)| ScoredCandidate {
                index,
                score: score_compiled(&padded, entry),
            })
            .collect()
    }

    /// Classify free text against the catalog.
    ///
    /// Empty (after normalization) input short-circuits without scoring.
    /// Otherwise entries are ranked by score descending with a stable sort,
    /// so equal scores resolve to the entry earlier in the catalog.
    pub fn classify(&self, text: &str) -> Classification {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return Classification::EmptyInput;
        }

        let padded = format!(" {normalized} ");
        let mut scored: Vec<ScoredCandidate> = self
            .compiled
            .iter()
            .enumerate()
            .map(|(index, entry)| ScoredCandidate {
                index,
                score: score_compiled(&padded, entry),
            })
            .collect();
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        let Some(best) = scored.first() else {
            return Classification::General { candidates: vec![] };
        };

        if best.score < MATCH_THRESHOLD {
            let candidates = scored
                .iter()
                .filter(|s| s.score > 0.0)
                .take(3)
                .map(|s| self.candidate(s))
                .collect();
            return Classification::General { candidates };
        }

        let candidates = scored.iter().take(5).map(|s| self.candidate(s)).collect();
        Classification::Matched {
            entry: self.catalog.entries()[best.index].clone(),
            score: best.score,
            candidates,
        }
    }

    fn candidate(&self, scored: &ScoredCandidate) -> Candidate {
        let entry = &self.catalog.entries()[scored.index];
        Candidate {
            id: entry.id.clone(),
            title: entry.title.clone(),
            score: scored.score,
        }
    }
}

fn score_compiled(padded: &str, entry: &CompiledEntry) -> f64 {
    let mut score = 0.0;
    for kw in &entry.keywords {
        let hits = kw.boundary.find_iter(padded).count();
        if hits > 0 {
            score += hits as f64 * kw.weight;
        } else if padded.contains(kw.normalized.as_str()) {
            score += SUBSTRING_WEIGHT;
        }
    }
    score
}
