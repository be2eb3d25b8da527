//! sarathi-core: lexicon-based classifiers for free-text guidance matching.
//!
//! Two independent, stateless classifiers over immutable in-memory catalogs:
//! a problem matcher (weighted keyword/phrase scoring with a general
//! fallback) and a single-label emotion tagger with derived confidence.

pub mod emotion;
pub mod normalize;
pub mod problem;

pub use emotion::{CONFUSION_LABEL, EmotionClassifier, EmotionEntry, EmotionLexicon, EmotionReading};
pub use normalize::normalize;
pub use problem::{
    Candidate, Classification, MATCH_THRESHOLD, PHRASE_WEIGHT, ProblemCatalog, ProblemEntry,
    ProblemMatcher, SUBSTRING_WEIGHT, ScoredCandidate, TOKEN_WEIGHT,
};
