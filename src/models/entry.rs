use chrono::{DateTime, Datelike, Local, Timelike};
use serde::{Deserialize, Serialize};

use super::{Mood, WeatherSnapshot};

/// Month names as stored in the `monthname` column and used by the
/// month-filter query.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The capture instant of an entry.
///
/// All fields are decomposed from one instant when the entry is written and
/// stored as-is. They are **never** recomputed on edit — an entry keeps the
/// clock reading of the moment it was created, even if the device timezone
/// changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedAt {
    /// Unix seconds. The time-window queries compare against this.
    pub timestamp: i64,
    pub year: i32,
    /// 1–12.
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    /// Full English month name ("January" … "December").
    #[serde(rename = "monthname")]
    pub month_name: String,
}

impl CreatedAt {
    /// Decompose a single instant into the stored representation.
    pub fn from_instant(instant: DateTime<Local>) -> Self {
        Self {
            timestamp: instant.timestamp(),
            year: instant.year(),
            month: instant.month(),
            day: instant.day(),
            hour: instant.hour(),
            minute: instant.minute(),
            month_name: MONTH_NAMES[instant.month0() as usize].to_string(),
        }
    }

    /// Capture the current wall clock.
    pub fn now() -> Self {
        Self::from_instant(Local::now())
    }
}

/// One journal record.
///
/// `tags` always equals `extract_tags(content)` — the store re-derives it on
/// every write, so it can never go stale relative to the entry's own content.
/// `created_at` and `weather` are fixed at creation; edits touch neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub id: i64,
    /// User-supplied, may be empty.
    pub title: String,
    pub content: String,
    #[serde(flatten)]
    pub created_at: CreatedAt,
    /// `None` means "not recorded".
    pub mood: Option<Mood>,
    /// `None` means no snapshot was available at creation, not an error.
    pub weather: Option<WeatherSnapshot>,
    /// Comma-joined `#token`s derived from `content`, first-occurrence order,
    /// duplicates collapsed. `None` when the content carries no tags.
    pub tags: Option<String>,
    /// Ordered attachment URIs; the first one is the thumbnail.
    #[serde(default)]
    pub images: Vec<String>,
}

impl DiaryEntry {
    /// The derived tags as individual tokens.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|joined| joined.split(',').collect())
            .unwrap_or_default()
    }
}

/// Input for creating a new entry.
///
/// The caller supplies the capture instant (typically [`CreatedAt::now`])
/// so that what gets stored is the moment the user hit "save", not the
/// moment the row was written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEntry {
    pub title: String,
    pub content: String,
    pub created_at: CreatedAt,
    pub mood: Option<Mood>,
    /// Opaque snapshot from the weather collaborator, if one was available.
    pub weather: Option<WeatherSnapshot>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Input for editing an entry.
///
/// Title, content, mood and images are overwritten as given; tags are
/// re-derived from the new content. The capture instant and the weather
/// snapshot are not editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEntry {
    pub title: String,
    pub content: String,
    pub mood: Option<Mood>,
    #[serde(default)]
    pub images: Vec<String>,
}
