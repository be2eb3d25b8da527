//! Assemble the user-facing guidance message from a classification result.

use sarathi_core::Classification;

/// Render a classification into the counsel text shown to the user.
///
/// Matched results carry the entry's payload verbatim; the general
/// fallback names up to three detected themes, or says that no clear
/// theme emerged; empty input asks for a message.
pub fn compose_guidance(result: &Classification) -> String {
    match result {
        Classification::EmptyInput => {
            "प्रिय भक्त, कृपया अपना संदेश लिखें — I need some text to offer guidance.".to_string()
        }
        Classification::General { candidates } => {
            let suggestions = if candidates.is_empty() {
                "I couldn't detect a clear single issue — please share more details.".to_string()
            } else {
                let themes: Vec<&str> = candidates.iter().map(|c| c.title.as_str()).collect();
                format!("I detected these themes: {}.", themes.join(", "))
            };
            let note = format!("Note: {suggestions}");
            [
                "प्रिय भक्त, every situation offers a path to growth.",
                "",
                "'तत्त्ववित्तु महाबाहो गुणकर्मविभागयोः।' (Bhagavad Gītā 3:28) — Understand the qualities and duties; act accordingly.",
                "",
                note.as_str(),
                "",
                "Practical: write a 3-point action plan, take 5 deep breaths to center, and do one small constructive step now.",
            ]
            .join("\n")
        }
        Classification::Matched { entry, .. } => [
            format!("प्रिय भक्त — {}", entry.title),
            String::new(),
            entry.shloka.clone(),
            format!("({})", entry.reference),
            String::new(),
            format!("Translation: {}", entry.translation),
            String::new(),
            format!("Practical Advice: {}", entry.practical_advice),
            String::new(),
            "Note: If this is a medical, legal, or severe mental-health issue please consult appropriate professionals.".to_string(),
        ]
        .join("\n"),
    }
}
