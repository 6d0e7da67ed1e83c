use rusqlite::Connection;

use crate::error::{Result, StoreError};

/// The entry table with the full current column set. New databases get
/// everything in one shot; `ADDITIVE_COLUMNS` below exists for databases
/// created by earlier versions.
const CREATE_DIARY_TABLE: &str = "CREATE TABLE IF NOT EXISTS diary (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    year INTEGER NOT NULL,
    month INTEGER NOT NULL,
    day INTEGER NOT NULL,
    hour INTEGER NOT NULL,
    minute INTEGER NOT NULL,
    monthname TEXT NOT NULL,
    timestamp INTEGER NOT NULL,
    mood TEXT,
    weather_icon TEXT,
    weather_temp REAL,
    weather_city TEXT,
    tags TEXT,
    images TEXT
)";

/// Columns introduced after the original schema, one `ALTER TABLE` each.
///
/// Applied unconditionally on every startup; "duplicate column name" is the
/// expected outcome on an up-to-date database and is treated as success.
/// Column additions only — nothing here may drop, rename or rewrite data.
const ADDITIVE_COLUMNS: &[(&str, &str)] = &[
    ("mood", "ALTER TABLE diary ADD COLUMN mood TEXT"),
    ("weather_icon", "ALTER TABLE diary ADD COLUMN weather_icon TEXT"),
    ("weather_temp", "ALTER TABLE diary ADD COLUMN weather_temp REAL"),
    ("weather_city", "ALTER TABLE diary ADD COLUMN weather_city TEXT"),
    ("tags", "ALTER TABLE diary ADD COLUMN tags TEXT"),
    ("images", "ALTER TABLE diary ADD COLUMN images TEXT"),
];

/// Create the entry table if absent and bring an older table up to the
/// current column set. Safe to call on every start, including against a
/// database already at the latest schema.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(CREATE_DIARY_TABLE)
        .map_err(StoreError::Schema)?;

    for (column, sql) in ADDITIVE_COLUMNS {
        match conn.execute_batch(sql) {
            Ok(()) => tracing::debug!("added column diary.{}", column),
            Err(err) if is_duplicate_column(&err) => {}
            Err(err) => return Err(StoreError::Schema(err)),
        }
    }

    Ok(())
}

fn is_duplicate_column(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(_, Some(msg)) if msg.contains("duplicate column name")
    )
}
