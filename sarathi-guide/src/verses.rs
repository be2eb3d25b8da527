//! Canonical verse library keyed by emotion label.
//!
//! Backs the emotion classifier's output with a teaching to display:
//! a random verse within the label's group, or a date-stable daily verse
//! drawn from the whole library.

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// One canonical verse with its translation and applied guidance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Verse {
    pub sanskrit: String,
    pub translation: String,
    pub chapter: u32,
    pub verse: u32,
    pub explanation: String,
    pub practical_advice: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerseGroup {
    pub label: String,
    pub verses: Vec<Verse>,
}

/// Immutable verse collection grouped by emotion label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerseLibrary(Vec<VerseGroup>);

const VERSES_JSON: &str = include_str!("../data/verses.json");

impl VerseLibrary {
    pub fn from_json(json: &str) -> Result<Self> {
        let groups: Vec<VerseGroup> = serde_json::from_str(json)?;
        Ok(Self(groups))
    }

    /// The embedded library ported from the original verse table.
    pub fn embedded() -> Result<Self> {
        Self::from_json(VERSES_JSON)
    }

    pub fn groups(&self) -> &[VerseGroup] {
        &self.0
    }

    fn group(&self, label: &str) -> Option<&VerseGroup> {
        self.0.iter().find(|g| g.label == label)
    }

    /// Pick a verse for an emotion label, choosing randomly within the
    /// group. Labels without a group of their own fall back to the
    /// confusion group.
    pub fn verse_for(&self, label: &str) -> Option<&Verse> {
        let group = self
            .group(label)
            .or_else(|| self.group(sarathi_core::CONFUSION_LABEL))?;
        group.verses.choose(&mut rand::thread_rng())
    }

    /// Date-stable verse of the day: the same date always yields the same
    /// verse, cycling through the flattened library.
    pub fn daily_verse(&self, date: NaiveDate) -> Option<&Verse> {
        let all: Vec<&Verse> = self.0.iter().flat_map(|g| g.verses.iter()).collect();
        if all.is_empty() {
            return None;
        }
        let day = date.num_days_from_ce() as usize;
        Some(all[day % all.len()])
    }
}
