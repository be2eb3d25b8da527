//! Fast-path topical counsel.
//!
//! Nine obvious life topics get an immediate canned response, checked with
//! case-insensitive substring probes on the raw message before the full
//! catalog scoring runs. First matching topic wins.

struct Topic {
    probes: &'static [&'static str],
    response: &'static str,
}

const TOPICS: &[Topic] = &[
    Topic {
        probes: &["job", "work", "career", "office", "boss", "colleague", "manager", "promotion"],
        response: "प्रिय कर्मयोगी, I understand your workplace challenges.\n\n\
            “कर्मण्येवाधिकारस्ते मा फलेषु कदाचन। मा कर्मफलहेतुर्भूर्मा ते सङ्गोऽस्त्वकर्मणि॥” (2.47)\n\n\
            You have the right to perform your prescribed duties, but never to the fruits of action.\n\n\
            🎯 Practical: Focus on excellence in action; release outcomes.",
    },
    Topic {
        probes: &[
            "relationship", "marriage", "family", "parents", "love", "breakup", "divorce",
            "partner", "wife", "husband",
        ],
        response: "प्रिय आत्मा, relationships are mirrors for growth.\n\n\
            “सर्वभूतस्थमात्मानं ... सर्वत्र समदर्शनः॥” (6.29)\n\n\
            A true yogi sees the Divine in all beings.\n\n\
            💕 Practical: Practice forgiveness and see the divine spark in the other.",
    },
    Topic {
        probes: &["money", "financial", "debt", "poor", "rich", "salary", "income", "bills"],
        response: "वत्स, financial concerns are real—remember this promise:\n\n\
            “अनन्याश्चिन्तयन्तो मां ... योगक्षेमं वहाम्यहम्॥” (9.22)\n\n\
            Align with dharma; your needs are carried.\n\n\
            💰 Practical: Serve through your skills; be diligent and content.",
    },
    Topic {
        probes: &["health", "disease", "sick", "pain", "illness", "doctor", "injury"],
        response: "प्रिय मित्र, the body is temporary; you are eternal.\n\n\
            “वासांसि जीर्णानि ... देही॥” (2.22)\n\n\
            Care for the body as a temple, but don't identify with it.\n\n\
            🏥 Practical: Sattvic food, breathwork, gentle movement, steady mind.",
    },
    Topic {
        probes: &["fear", "afraid", "scared", "anxiety", "panic", "worry", "worried"],
        response: "वत्स, fear fades with remembrance of your true nature.\n\n\
            “सर्वधर्मान्परित्यज्य ... मा शुचः॥” (18.66)\n\n\
            🛡️ Practical: Breathe, pray, surrender the outcome, act with courage.",
    },
    Topic {
        probes: &["anger", "angry", "mad", "frustrated", "hate", "irritated", "rage", "furious"],
        response: "मित्र, anger clouds wisdom.\n\n\
            “क्रोधाद्भवति सम्मोहः ... प्रणश्यति॥” (2.63)\n\n\
            🔥 Practical: Pause, exhale slowly, choose one constructive action.",
    },
    Topic {
        probes: &["sad", "depression", "lonely", "grief", "cry", "sorrow", "heartbroken"],
        response: "प्रिय आत्मा, your pain is seen.\n\n\
            “न त्वेवाहं जातु नासं ... परम्॥” (2.12)\n\n\
            🌅 Practical: Gentle self-care, connection, and remember—this too shall pass.",
    },
    Topic {
        probes: &["stress", "pressure", "overwhelm", "burden", "tension", "burnout", "stressed"],
        response: "प्रिय मित्र, release attachment to outcomes.\n\n\
            “योगस्थः कुरु कर्माणि ... उच्यते॥” (2.48)\n\n\
            ⚖️ Practical: Focus on effort; meditate daily for equanimity.",
    },
    Topic {
        probes: &[
            "confused", "lost", "direction", "purpose", "meaning", "which way", "what should i do",
        ],
        response: "वत्स, confusion precedes clarity.\n\n\
            “यदा ते मोहकलिलं ... च॥” (2.52)\n\n\
            🧭 Practical: Quiet the mind; seek knowledge; your dharma will reveal itself.",
    },
];

/// Return the canned counsel for the first topic whose probe appears in the
/// message, if any. Substring checks on the lower-cased raw message, same
/// as the original chat flow.
pub fn topical_counsel(message: &str) -> Option<&'static str> {
    let lowered = message.to_lowercase();
    TOPICS
        .iter()
        .find(|t| t.probes.iter().any(|p| lowered.contains(p)))
        .map(|t| t.response)
}
