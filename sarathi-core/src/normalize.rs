//! Text normalization shared by the classifiers.
//!
//! The matching contract depends on this exact pipeline: lower-case, unify
//! curly apostrophes, turn every character that is not an ASCII word
//! character or apostrophe into a space, collapse whitespace, trim.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // ASCII word class, not \w: the regex crate's \w keeps combining marks
    // and join controls, so emoji variation selectors and ZWJs would survive
    // and glue onto adjacent tokens.
    static ref NON_WORD: Regex = Regex::new(r"[^A-Za-z0-9_'\s]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalize free text for keyword matching.
///
/// Pure and total: any input produces a well-formed string, and empty or
/// whitespace-only input normalizes to the empty string. Punctuation,
/// symbols and emoji become separators so adjacent words never concatenate.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase().replace('\u{2019}', "'");
    let spaced = NON_WORD.replace_all(&lowered, " ");
    WHITESPACE.replace_all(&spaced, " ").trim().to_string()
}
