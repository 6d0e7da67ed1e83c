use serde::{Deserialize, Serialize};

/// The user's self-reported emotional state.
///
/// A fixed five-step scale. Each mood has a marker (the emoji stored in the
/// database and shown in the UI), a human label for text input, and an
/// ordinal score 1–5 used by the weekly mood series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    #[serde(rename = "😭")]
    Terrible,
    #[serde(rename = "😕")]
    Bad,
    #[serde(rename = "😐")]
    Okay,
    #[serde(rename = "🙂")]
    Good,
    #[serde(rename = "😄")]
    Great,
}

impl Mood {
    /// Worst to best.
    pub const ALL: [Mood; 5] = [
        Mood::Terrible,
        Mood::Bad,
        Mood::Okay,
        Mood::Good,
        Mood::Great,
    ];

    /// The marker text persisted in the `mood` column.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Terrible => "😭",
            Self::Bad => "😕",
            Self::Okay => "😐",
            Self::Good => "🙂",
            Self::Great => "😄",
        }
    }

    /// Ordinal score, 1 (terrible) to 5 (great).
    pub fn score(&self) -> u8 {
        match self {
            Self::Terrible => 1,
            Self::Bad => 2,
            Self::Okay => 3,
            Self::Good => 4,
            Self::Great => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Terrible => "terrible",
            Self::Bad => "bad",
            Self::Okay => "okay",
            Self::Good => "good",
            Self::Great => "great",
        }
    }

    /// Parse a stored marker. Unknown text reads back as "no mood" — rows
    /// written by newer app versions with markers this build doesn't know
    /// must not fail the whole query.
    pub fn from_marker(marker: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.marker() == marker)
    }

    /// Parse a human label (case-insensitive), for CLI input.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.to_ascii_lowercase();
        Self::ALL.iter().copied().find(|m| m.label() == label)
    }
}
