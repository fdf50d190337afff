//! Append-only generation log.
//!
//! One entry per generated PDF, recorded in the active profile's
//! `generated/history.json`. Entries are never mutated or removed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::profiles::store::{ProfileStore, StoreError};

/// Metadata record for one generated PDF artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub company_name: String,
    pub timestamp: DateTime<Utc>,
    pub pdf_path: String,
    pub json_path: String,
}

/// All generation entries for the active profile, in append order.
pub fn load_history(store: &ProfileStore) -> Result<Vec<HistoryEntry>, StoreError> {
    store.ensure_dirs(&store.active())?;
    store.read_json(&store.active_paths().history)
}

/// Appends one entry, rewriting the whole log file.
pub fn append_entry(store: &ProfileStore, entry: HistoryEntry) -> Result<(), StoreError> {
    let mut history = load_history(store)?;
    history.push(entry);
    store.write_json(&store.active_paths().history, &history)
}

/// Linear scan by id; the log is small and append-ordered.
pub fn find_entry(store: &ProfileStore, id: &str) -> Result<Option<HistoryEntry>, StoreError> {
    Ok(load_history(store)?
        .into_iter()
        .find(|e| e.id.to_string() == id))
}
