//! Writing statistics derived from already-fetched entries.
//!
//! Everything here is pure and synchronous: the caller picks the window
//! (via [`crate::db::Database::entries_since`]) and hands the slice in.
//! Matching is done on each entry's stored (year, month, day) fields, the
//! decomposition captured at write time.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::DiaryEntry;

/// How far back the streak scan looks by default.
pub const DEFAULT_STREAK_WINDOW: u32 = 30;

/// Consecutive calendar days with at least one entry, walking backward
/// from `today`.
///
/// Today itself is allowed to be empty: the user may simply not have
/// written yet, so a miss on day 0 keeps scanning. A miss on any later day
/// ends the streak. The scan stops after `window_days` regardless.
pub fn writing_streak(entries: &[DiaryEntry], today: NaiveDate, window_days: u32) -> u32 {
    let mut streak = 0;
    for i in 0..window_days {
        let day = today - Duration::days(i64::from(i));
        if has_entry_on(entries, day) {
            streak += 1;
        } else if i > 0 {
            break;
        }
    }
    streak
}

/// Mood scores for the 7 calendar days ending `today`, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodSeries {
    /// Short weekday names ("Sun" … "Sat"), one per slot.
    pub labels: [&'static str; 7],
    /// Ordinal mood scores 1–5; 0 where the day has no mood entry.
    pub values: [u8; 7],
    /// Whether any slot is non-zero. An all-zero series means "no data",
    /// not "every day scored zero" — callers use this to skip rendering.
    pub has_data: bool,
}

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Build the weekly mood series.
///
/// For each day, the first entry in slice order carrying a recognized mood
/// wins; later moods on the same day are ignored. Entries fetched with
/// [`crate::db::Database::entries_since`] arrive oldest-first, so "first"
/// means the earliest written that day.
pub fn weekly_mood_series(entries: &[DiaryEntry], today: NaiveDate) -> MoodSeries {
    let mut labels = [""; 7];
    let mut values = [0u8; 7];

    for (slot, offset) in (0..7).rev().enumerate() {
        let day = today - Duration::days(offset);
        labels[slot] = DAY_NAMES[day.weekday().num_days_from_sunday() as usize];
        values[slot] = entries
            .iter()
            .filter(|e| is_on_day(e, day))
            .find_map(|e| e.mood.map(|m| m.score()))
            .unwrap_or(0);
    }

    let has_data = values.iter().any(|v| *v > 0);
    MoodSeries {
        labels,
        values,
        has_data,
    }
}

/// Entry count for whatever window the caller fetched. Shown as the
/// "this week" statistic when fed the last 7 days.
pub fn entries_in_window(entries: &[DiaryEntry]) -> usize {
    entries.len()
}

fn has_entry_on(entries: &[DiaryEntry], day: NaiveDate) -> bool {
    entries.iter().any(|e| is_on_day(e, day))
}

fn is_on_day(entry: &DiaryEntry, day: NaiveDate) -> bool {
    entry.created_at.year == day.year()
        && entry.created_at.month == day.month()
        && entry.created_at.day == day.day()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreatedAt, Mood};

    fn entry_on(year: i32, month: u32, day: u32, mood: Option<Mood>) -> DiaryEntry {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let timestamp = date.and_hms_opt(12, 0, 0).unwrap().and_utc().timestamp();
        DiaryEntry {
            id: 0,
            title: String::new(),
            content: String::new(),
            created_at: CreatedAt {
                timestamp,
                year,
                month,
                day,
                hour: 12,
                minute: 0,
                month_name: crate::models::MONTH_NAMES[(month - 1) as usize].to_string(),
            },
            mood,
            weather: None,
            tags: None,
            images: Vec::new(),
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn streak_breaks_at_first_gap_after_a_match() {
        // entries today, yesterday and 3 days ago — the gap at -2 ends it
        let today = date(2024, 6, 15);
        let entries = vec![
            entry_on(2024, 6, 15, None),
            entry_on(2024, 6, 14, None),
            entry_on(2024, 6, 12, None),
        ];
        assert_eq!(writing_streak(&entries, today, DEFAULT_STREAK_WINDOW), 2);
    }

    #[test]
    fn streak_survives_an_empty_today() {
        // nothing written yet today; yesterday and the day before count
        let today = date(2024, 6, 15);
        let entries = vec![entry_on(2024, 6, 14, None), entry_on(2024, 6, 13, None)];
        assert_eq!(writing_streak(&entries, today, DEFAULT_STREAK_WINDOW), 2);
    }

    #[test]
    fn streak_is_zero_with_no_recent_entries() {
        let today = date(2024, 6, 15);
        let entries = vec![entry_on(2024, 4, 1, None)];
        assert_eq!(writing_streak(&entries, today, DEFAULT_STREAK_WINDOW), 0);
    }

    #[test]
    fn streak_crosses_month_boundaries() {
        let today = date(2024, 3, 1);
        let entries = vec![
            entry_on(2024, 3, 1, None),
            entry_on(2024, 2, 29, None),
            entry_on(2024, 2, 28, None),
        ];
        assert_eq!(writing_streak(&entries, today, DEFAULT_STREAK_WINDOW), 3);
    }

    #[test]
    fn streak_stops_at_the_window_edge() {
        let today = date(2024, 6, 30);
        let entries: Vec<_> = (1..=30).map(|d| entry_on(2024, 6, d, None)).collect();
        assert_eq!(writing_streak(&entries, today, 7), 7);
    }

    #[test]
    fn mood_series_first_entry_of_the_day_wins() {
        let today = date(2024, 6, 15);
        let entries = vec![
            entry_on(2024, 6, 13, Some(Mood::Great)),
            entry_on(2024, 6, 13, Some(Mood::Terrible)), // same day, ignored
            entry_on(2024, 6, 15, Some(Mood::Okay)),
        ];
        let series = weekly_mood_series(&entries, today);
        assert_eq!(series.values, [0, 0, 0, 0, 5, 0, 3]);
        assert!(series.has_data);
    }

    #[test]
    fn mood_series_skips_entries_without_mood() {
        let today = date(2024, 6, 15);
        let entries = vec![
            entry_on(2024, 6, 15, None),
            entry_on(2024, 6, 15, Some(Mood::Good)),
        ];
        let series = weekly_mood_series(&entries, today);
        assert_eq!(series.values[6], 4);
    }

    #[test]
    fn mood_series_without_any_mood_reports_no_data() {
        let today = date(2024, 6, 15);
        let entries = vec![entry_on(2024, 6, 15, None)];
        let series = weekly_mood_series(&entries, today);
        assert_eq!(series.values, [0; 7]);
        assert!(!series.has_data);
    }

    #[test]
    fn mood_series_labels_run_oldest_to_today() {
        // 2024-06-15 is a Saturday, so the window is Sun .. Sat
        let today = date(2024, 6, 15);
        let series = weekly_mood_series(&[], today);
        assert_eq!(
            series.labels,
            ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        );
    }

    #[test]
    fn window_count_is_the_slice_length() {
        let entries = vec![entry_on(2024, 6, 15, None), entry_on(2024, 6, 14, None)];
        assert_eq!(entries_in_window(&entries), 2);
    }
}
