//! Bulk export of the whole journal into one portable JSON document.
//!
//! The service's contract ends at producing the serialized document and
//! handing the finished file to a sharing collaborator; what that
//! collaborator does with it (share sheet, sync folder, nothing) is not
//! the journal's concern. There is no rollback: a hand-off failure after a
//! successful write is reported as a failure but leaves the file on disk —
//! it is a private, re-creatable artifact, not a second source of truth.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::db::Database;
use crate::error::ExportError;
use crate::models::DiaryEntry;

/// The `app` field stamped into every backup document.
pub const APP_NAME: &str = "Feelio";

/// The portable snapshot of the entire journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub app: String,
    /// ISO-8601 instant of the export.
    pub export_date: String,
    pub total_entries: usize,
    pub entries: Vec<DiaryEntry>,
}

/// Where a finished backup file goes after it is written.
///
/// This is the seam for the platform's share sheet. The error string is
/// shown to the user as-is.
pub trait ShareTarget {
    fn share(&self, path: &Path) -> std::result::Result<(), String>;
}

/// Hand-off that accepts everything and does nothing — for headless use,
/// where writing the file is the whole job.
pub struct NoShare;

impl ShareTarget for NoShare {
    fn share(&self, _path: &Path) -> std::result::Result<(), String> {
        Ok(())
    }
}

/// What a successful export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub entry_count: usize,
}

/// Assemble the export document from the full entry list.
pub fn build_document(db: &Database) -> Result<ExportDocument, ExportError> {
    let entries = db.all_entries()?;
    Ok(ExportDocument {
        app: APP_NAME.to_string(),
        export_date: Utc::now().to_rfc3339(),
        total_entries: entries.len(),
        entries,
    })
}

/// Read-all → serialize → write → hand off, as one outcome.
///
/// The backup lands in `dir` as `feelio-backup-YYYY-MM-DD.json`.
pub fn export_to_dir(
    db: &Database,
    dir: &Path,
    share: &dyn ShareTarget,
) -> Result<ExportSummary, ExportError> {
    let document = build_document(db)?;
    let json = serde_json::to_string_pretty(&document).map_err(ExportError::Serialize)?;

    let file_name = format!("feelio-backup-{}.json", Utc::now().format("%Y-%m-%d"));
    let path = dir.join(file_name);
    std::fs::write(&path, json).map_err(ExportError::Write)?;
    tracing::info!(
        "wrote backup of {} entries to {}",
        document.total_entries,
        path.display()
    );

    share.share(&path).map_err(ExportError::Handoff)?;

    Ok(ExportSummary {
        path,
        entry_count: document.total_entries,
    })
}
