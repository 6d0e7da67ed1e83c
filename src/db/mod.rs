mod schema;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Result, StoreError};
use crate::models::{CreatedAt, DiaryEntry, Mood, NewEntry, UpdateEntry, WeatherSnapshot};
use crate::tags;

/// Longest content the store accepts, in characters.
pub const MAX_CONTENT_CHARS: usize = 10_000;

const ENTRY_COLUMNS: &str = "id, title, content, year, month, day, hour, minute, monthname, \
     timestamp, mood, weather_icon, weather_temp, weather_city, tags, images";

/// The tables the store knows about. `clear` only accepts members of this
/// set — table names never travel as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Diary,
}

impl Table {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Diary => "diary",
        }
    }
}

/// Handle to the journal database.
///
/// A single connection behind a mutex: the storage layer is the only
/// serialization point, each operation is its own atomic unit, and no
/// transaction spans multiple logical operations. Cloning shares the
/// same underlying connection.
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Database path has no parent directory"))?;
        std::fs::create_dir_all(parent)?;
        let conn = Connection::open(&path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_default() -> anyhow::Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "feelio")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let db_path = dirs.data_dir().join("feelio.db");
        Self::open(db_path)
    }

    pub fn open_memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Bring the schema up to date. Must run before any other operation,
    /// on every start; the schema module owns the additive-migration rules.
    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        schema::ensure_schema(&conn)
    }

    // ============================================================
    // Writes
    // ============================================================

    /// Persist a new entry and return its id.
    ///
    /// Tags are derived from the content here — callers never supply them.
    /// Ids are assigned by SQLite with `AUTOINCREMENT`, so an id is never
    /// reused after deletion. One atomic INSERT; there is no partial write.
    pub fn insert_entry(&self, input: &NewEntry) -> Result<i64> {
        check_content_length(&input.content)?;
        let tags = tags::extract_tags(&input.content);
        let images = join_images(&input.images);
        let at = &input.created_at;

        let conn = self.conn.lock().expect("database lock poisoned");
        conn.execute(
            "INSERT INTO diary (title, content, year, month, day, hour, minute, monthname, \
             timestamp, mood, weather_icon, weather_temp, weather_city, tags, images)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                input.title,
                input.content,
                at.year,
                at.month,
                at.day,
                at.hour,
                at.minute,
                at.month_name,
                at.timestamp,
                input.mood.map(|m| m.marker()),
                input.weather.as_ref().map(|w| w.icon.as_str()),
                input.weather.as_ref().map(|w| f64::from(w.temperature_c)),
                input.weather.as_ref().map(|w| w.city.as_str()),
                tags,
                images,
            ],
        )
        .map_err(StoreError::Write)?;

        Ok(conn.last_insert_rowid())
    }

    /// Overwrite title, content, mood and images, re-deriving tags from the
    /// new content. The capture instant and the weather snapshot are left
    /// untouched. Returns `false` when no row has this id — the zero-row
    /// UPDATE is not an error, but the caller can tell nothing happened.
    pub fn update_entry(&self, id: i64, input: &UpdateEntry) -> Result<bool> {
        check_content_length(&input.content)?;
        let tags = tags::extract_tags(&input.content);
        let images = join_images(&input.images);

        let conn = self.conn.lock().expect("database lock poisoned");
        let rows = conn
            .execute(
                "UPDATE diary SET title = ?, content = ?, mood = ?, tags = ?, images = ? \
                 WHERE id = ?",
                params![
                    input.title,
                    input.content,
                    input.mood.map(|m| m.marker()),
                    tags,
                    images,
                    id,
                ],
            )
            .map_err(StoreError::Write)?;

        Ok(rows > 0)
    }

    /// Remove an entry. Deleting an id that is already absent is a no-op.
    pub fn delete_entry(&self, id: i64) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        conn.execute("DELETE FROM diary WHERE id = ?", [id])
            .map_err(StoreError::Write)?;
        Ok(())
    }

    /// Delete every row of the given table. Destructive; reset flows only.
    pub fn clear(&self, table: Table) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        conn.execute(&format!("DELETE FROM {}", table.as_str()), [])
            .map_err(StoreError::Write)?;
        Ok(())
    }

    // ============================================================
    // Queries
    // ============================================================

    /// Fetch one entry. `None` for an absent id — never an error.
    pub fn entry(&self, id: i64) -> Result<Option<DiaryEntry>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn
            .prepare(&format!("SELECT {ENTRY_COLUMNS} FROM diary WHERE id = ?"))
            .map_err(StoreError::Query)?;
        stmt.query_row([id], row_to_entry)
            .optional()
            .map_err(StoreError::Query)
    }

    /// Entries whose stored year and month name match exactly, most recently
    /// inserted first (ids are monotonic, so id order is a recency proxy).
    pub fn entries_for_month(&self, year: i32, month_name: &str) -> Result<Vec<DiaryEntry>> {
        self.query_entries(
            &format!(
                "SELECT {ENTRY_COLUMNS} FROM diary WHERE year = ? AND monthname = ? \
                 ORDER BY id DESC"
            ),
            params![year, month_name],
        )
    }

    /// Entries whose title or content contains `query`, most recent first.
    ///
    /// Matching uses SQLite's `LIKE`, which is case-insensitive for ASCII —
    /// a deliberate choice, kept stable here rather than left to engine
    /// defaults. No minimum query length is enforced; filtering trivially
    /// short input is the caller's concern.
    pub fn search(&self, query: &str) -> Result<Vec<DiaryEntry>> {
        let pattern = format!("%{query}%");
        self.query_entries(
            &format!(
                "SELECT {ENTRY_COLUMNS} FROM diary WHERE title LIKE ? OR content LIKE ? \
                 ORDER BY id DESC"
            ),
            params![pattern, pattern],
        )
    }

    /// Entries captured at or after `cutoff` (unix seconds), oldest first.
    /// The only ascending-order query; the analytics time series depends on
    /// that ordering.
    pub fn entries_since(&self, cutoff: i64) -> Result<Vec<DiaryEntry>> {
        self.query_entries(
            &format!(
                "SELECT {ENTRY_COLUMNS} FROM diary WHERE timestamp >= ? ORDER BY timestamp ASC"
            ),
            params![cutoff],
        )
    }

    /// Every entry, most recent first. Export only.
    pub fn all_entries(&self) -> Result<Vec<DiaryEntry>> {
        self.query_entries(
            &format!("SELECT {ENTRY_COLUMNS} FROM diary ORDER BY id DESC"),
            [],
        )
    }

    fn query_entries(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<DiaryEntry>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(sql).map_err(StoreError::Query)?;
        let entries = stmt
            .query_map(params, row_to_entry)
            .map_err(StoreError::Query)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::Query)?;
        Ok(entries)
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
        }
    }
}

fn check_content_length(content: &str) -> Result<()> {
    let length = content.chars().count();
    if length > MAX_CONTENT_CHARS {
        return Err(StoreError::InvalidInput(format!(
            "content is {length} characters, the limit is {MAX_CONTENT_CHARS}"
        )));
    }
    Ok(())
}

fn join_images(images: &[String]) -> Option<String> {
    if images.is_empty() {
        None
    } else {
        Some(images.join(","))
    }
}

fn row_to_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<DiaryEntry> {
    let mood = row
        .get::<_, Option<String>>(10)?
        .as_deref()
        .and_then(Mood::from_marker);

    // A snapshot is stored whole or not at all; a row with only some of the
    // three columns set predates weather capture and reads as none.
    let weather = match (
        row.get::<_, Option<String>>(11)?,
        row.get::<_, Option<f64>>(12)?,
        row.get::<_, Option<String>>(13)?,
    ) {
        (Some(icon), Some(temp), Some(city)) => Some(WeatherSnapshot {
            icon,
            temperature_c: temp.round() as i32,
            city,
        }),
        _ => None,
    };

    let images = row
        .get::<_, Option<String>>(15)?
        .map(|joined| joined.split(',').map(str::to_string).collect())
        .unwrap_or_default();

    Ok(DiaryEntry {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        created_at: CreatedAt {
            year: row.get(3)?,
            month: row.get(4)?,
            day: row.get(5)?,
            hour: row.get(6)?,
            minute: row.get(7)?,
            month_name: row.get(8)?,
            timestamp: row.get(9)?,
        },
        mood,
        weather,
        tags: row.get(14)?,
        images,
    })
}
