//! Error types for the storage core.
//!
//! Failures are descriptive at the library level; the CLI maps them to
//! user-facing messages. Nothing here is swallowed silently — the single
//! deliberate exception is the duplicate-column case during migration,
//! which is handled inside the schema module before an error is ever built.

use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures raised by the storage core.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The entry table could not be created or migrated. Fatal at startup.
    #[error("schema setup failed: {0}")]
    Schema(#[source] rusqlite::Error),

    /// An insert, update or delete could not complete. The caller decides
    /// whether to retry; the store never does.
    #[error("write failed: {0}")]
    Write(#[source] rusqlite::Error),

    /// A read failed. Distinct from "not found", which reads report as an
    /// empty result.
    #[error("query failed: {0}")]
    Query(#[source] rusqlite::Error),

    /// Input rejected before touching storage (e.g. content over the
    /// length bound).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Failures raised by the export service.
///
/// The serialize/write path is partitioned from the hand-off path: a failed
/// hand-off after a successful write leaves the backup file on disk.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("could not serialize journal: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("could not write backup file: {0}")]
    Write(#[source] std::io::Error),

    /// The sharing collaborator refused the finished backup file.
    #[error("could not hand off backup for sharing: {0}")]
    Handoff(String),
}
