//! Mood labels and keyword-based mood detection

use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Neutral,
    Stressed,
    Anxious,
    Sad,
    Lonely,
    Angry,
    Tired,
    Overwhelmed,
    Unmotivated,
}

/// Accepted labels, including the compound ones offered by the mood picker.
/// Order matters for the substring fallback.
const LABELS: &[(&str, Mood)] = &[
    ("happy", Mood::Happy),
    ("neutral", Mood::Neutral),
    ("stressed", Mood::Stressed),
    ("anxious", Mood::Anxious),
    ("sad", Mood::Sad),
    ("lonely", Mood::Lonely),
    ("angry", Mood::Angry),
    ("tired / burned out", Mood::Tired),
    ("tired/burned out", Mood::Tired),
    ("tired", Mood::Tired),
    ("overwhelmed", Mood::Overwhelmed),
    ("unmotivated / low energy", Mood::Unmotivated),
    ("unmotivated", Mood::Unmotivated),
    ("low energy", Mood::Unmotivated),
];

/// Keyword groups for free-text detection, highest priority first
const KEYWORDS: &[(Mood, &[&str])] = &[
    (Mood::Stressed, &["stress", "stressed", "pressure", "overload"]),
    (Mood::Anxious, &["anxious", "anxiety", "panic"]),
    (Mood::Sad, &["sad", "upset", "depressed", "down"]),
    (Mood::Angry, &["angry", "mad", "furious"]),
    (Mood::Lonely, &["lonely", "alone", "no one"]),
    (Mood::Tired, &["tired", "exhausted", "burned out", "burnt out"]),
    (Mood::Overwhelmed, &["overwhelmed", "too much"]),
    (Mood::Unmotivated, &["no motivation", "unmotivated", "lazy"]),
    (Mood::Happy, &["happy", "good", "excited"]),
];

struct KeywordMatcher {
    automaton: AhoCorasick,
    /// Index into KEYWORDS for each automaton pattern
    group_of: Vec<usize>,
}

static KEYWORD_MATCHER: LazyLock<KeywordMatcher> = LazyLock::new(|| {
    let mut patterns = Vec::new();
    let mut group_of = Vec::new();
    for (group, (_, words)) in KEYWORDS.iter().enumerate() {
        for word in *words {
            patterns.push(*word);
            group_of.push(group);
        }
    }
    let automaton = AhoCorasick::new(&patterns).expect("Invalid mood keyword set");
    KeywordMatcher { automaton, group_of }
});

impl Mood {
    pub const ALL: [Mood; 10] = [
        Mood::Happy,
        Mood::Neutral,
        Mood::Stressed,
        Mood::Anxious,
        Mood::Sad,
        Mood::Lonely,
        Mood::Angry,
        Mood::Tired,
        Mood::Overwhelmed,
        Mood::Unmotivated,
    ];

    /// Normalize a user-picked label. Unknown or empty labels are neutral.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase();
        if label.is_empty() {
            return Mood::Neutral;
        }

        LABELS
            .iter()
            .find(|(key, _)| *key == label)
            .or_else(|| LABELS.iter().find(|(key, _)| label.contains(key)))
            .map(|(_, mood)| *mood)
            .unwrap_or(Mood::Neutral)
    }

    /// Guess a mood from a free-text message by keyword.
    ///
    /// Keywords are plain substrings, so "sadness" counts as sad. When
    /// several groups match, the group listed first wins.
    pub fn detect(message: &str) -> Self {
        let text = message.to_lowercase();
        let matcher = &*KEYWORD_MATCHER;
        matcher
            .automaton
            .find_overlapping_iter(&text)
            .map(|m| matcher.group_of[m.pattern().as_usize()])
            .min()
            .map(|group| KEYWORDS[group].0)
            .unwrap_or(Mood::Neutral)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Stressed => "stressed",
            Mood::Anxious => "anxious",
            Mood::Sad => "sad",
            Mood::Lonely => "lonely",
            Mood::Angry => "angry",
            Mood::Tired => "tired",
            Mood::Overwhelmed => "overwhelmed",
            Mood::Unmotivated => "unmotivated",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
