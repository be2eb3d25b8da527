//! sarathi-guide: turns classification results into user-facing counsel.
//!
//! Response assembly for the classifiers in sarathi-core: canned fast-path
//! answers for obvious topics, full guidance composed from a catalog match,
//! and the verse library backing emotion readings.

pub mod counsel;
pub mod topical;
pub mod verses;

pub use counsel::compose_guidance;
pub use topical::topical_counsel;
pub use verses::{Verse, VerseGroup, VerseLibrary};

use sarathi_core::ProblemMatcher;

/// Full counsel flow for one message: topical fast path first, otherwise
/// classify against the catalog and compose the guidance text.
pub fn counsel(matcher: &ProblemMatcher, message: &str) -> String {
    if let Some(quick) = topical_counsel(message) {
        return quick.to_string();
    }
    compose_guidance(&matcher.classify(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sarathi_lexicon::problem_matcher;

    #[test]
    fn test_counsel_uses_topical_fast_path() {
        let matcher = problem_matcher().unwrap();
        let out = counsel(&matcher, "I am so worried about everything");
        assert!(out.contains("fear fades with remembrance"));
    }

    #[test]
    fn test_counsel_falls_through_to_catalog() {
        let matcher = problem_matcher().unwrap();
        // No topical probe fires, but the catalog matches the insomnia row
        // through its phrase keyword.
        let out = counsel(&matcher, "I just can't sleep at night");
        assert!(out.contains("Practical Advice:"));
        assert!(out.contains("Fear & Anxiety"));
    }

    #[test]
    fn test_counsel_on_empty_message() {
        let matcher = problem_matcher().unwrap();
        let out = counsel(&matcher, "");
        assert!(out.contains("I need some text"));
    }
}
