//! Append-only version log for profile edits.
//!
//! Every save of profile data first snapshots the *previous* merged document
//! into `generated/profile_history.json`. Entries are never mutated or
//! removed; restoring copies a snapshot back into the split files and then
//! appending continues — history itself is never rewritten.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::ResumeDocument;
use crate::profiles::store::{ProfileStore, StoreError};

/// One full-snapshot record of the active profile's merged document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub data: ResumeDocument,
}

/// All version entries for the active profile, in append order.
pub fn load_versions(store: &ProfileStore) -> Result<Vec<VersionEntry>, StoreError> {
    store.ensure_dirs(&store.active())?;
    store.read_json(&store.active_paths().profile_history)
}

/// Appends a snapshot of `data` and returns the new entry's id.
pub fn append_version(store: &ProfileStore, data: ResumeDocument) -> Result<Uuid, StoreError> {
    let mut versions = load_versions(store)?;
    let entry = VersionEntry {
        id: Uuid::new_v4(),
        timestamp: Utc::now(),
        data,
    };
    let id = entry.id;
    versions.push(entry);
    store.write_json(&store.active_paths().profile_history, &versions)?;
    Ok(id)
}

/// Overwrites the active profile's split files with the snapshot stored
/// under `id`. The content file is always written; the info file only when
/// the snapshot actually carries info keys.
pub fn restore_version(store: &ProfileStore, id: &str) -> Result<(), StoreError> {
    let versions = load_versions(store)?;
    let entry = versions
        .into_iter()
        .find(|v| v.id.to_string() == id)
        .ok_or_else(|| StoreError::NotFound("Version not found".to_string()))?;

    let (content, info) = entry.data.split();
    store.save_content(&content)?;
    if !info.is_empty() {
        store.save_info(&info)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn document(summary: &str) -> ResumeDocument {
        serde_json::from_value(json!({
            "basics": {"name": "Jane Doe"},
            "professional_summary": summary,
            "work": [{"company": "X", "position": "Eng"}]
        }))
        .unwrap()
    }

    #[test]
    fn test_append_then_load_preserves_order() {
        let dir = tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profiles"));

        let first = append_version(&store, document("one")).unwrap();
        let second = append_version(&store, document("two")).unwrap();

        let versions = load_versions(&store).unwrap();
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[0].id, first);
        assert_eq!(versions[1].id, second);
        assert_eq!(versions[1].data.professional_summary.as_deref(), Some("two"));
    }

    #[test]
    fn test_restore_overwrites_split_files() {
        let dir = tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profiles"));

        let id = append_version(&store, document("snapshot")).unwrap();

        // Current files hold something else entirely
        let (content, info) = document("current").split();
        store.save_content(&content).unwrap();
        store.save_info(&info).unwrap();

        restore_version(&store, &id.to_string()).unwrap();

        let restored = ResumeDocument::merge(
            store.load_content().unwrap(),
            store.load_info().unwrap(),
        );
        assert_eq!(restored.professional_summary.as_deref(), Some("snapshot"));
        assert_eq!(
            restored.basics.and_then(|b| b.name),
            Some("Jane Doe".to_string())
        );
    }

    #[test]
    fn test_restore_skips_info_when_snapshot_has_none() {
        let dir = tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profiles"));

        let content_only: ResumeDocument =
            serde_json::from_value(json!({"professional_summary": "only content"})).unwrap();
        let id = append_version(&store, content_only).unwrap();

        let (_, info) = document("keep my info").split();
        store.save_info(&info).unwrap();

        restore_version(&store, &id.to_string()).unwrap();

        // Info file untouched by the info-less snapshot
        let info = store.load_info().unwrap();
        assert_eq!(
            info.basics.and_then(|b| b.name),
            Some("Jane Doe".to_string())
        );
    }

    #[test]
    fn test_restore_unknown_id_is_not_found() {
        let dir = tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profiles"));

        append_version(&store, document("x")).unwrap();
        assert!(matches!(
            restore_version(&store, "no-such-id"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_restore_does_not_rewrite_history() {
        let dir = tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profiles"));

        let id = append_version(&store, document("a")).unwrap();
        append_version(&store, document("b")).unwrap();

        restore_version(&store, &id.to_string()).unwrap();
        assert_eq!(load_versions(&store).unwrap().len(), 2);
    }
}
