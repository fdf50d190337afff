//! Profile store — path resolution and lazy initialization of per-profile
//! files.
//!
//! Layout per profile:
//! `<root>/<name>/{resume_data.json, info.json, prompts.json,
//! generated/{history.json, profile_history.json}}`.
//!
//! Writes are plain in-place rewrites with no atomic rename, and nothing
//! locks the JSON files across requests; concurrent saves are last-writer-
//! wins. The active-profile cell is guarded only for the single read/write.

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::models::resume::{ContentSection, InfoSection};

pub const DEFAULT_PROFILE: &str = "default";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    InvalidOperation(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// Resolved file paths for one profile's artifacts.
#[derive(Debug, Clone)]
pub struct ProfilePaths {
    pub base: PathBuf,
    pub resume_data: PathBuf,
    pub info: PathBuf,
    pub prompts: PathBuf,
    /// `generated/` — per-generation output dirs and both logs live here.
    pub storage: PathBuf,
    pub history: PathBuf,
    pub profile_history: PathBuf,
}

pub struct ProfileStore {
    root: PathBuf,
    active: RwLock<String>,
}

impl ProfileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            active: RwLock::new(DEFAULT_PROFILE.to_string()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn active(&self) -> String {
        self.active.read().clone()
    }

    fn set_active(&self, name: &str) {
        *self.active.write() = name.to_string();
    }

    /// Deterministic path resolution for a profile's artifacts.
    pub fn paths(&self, name: &str) -> ProfilePaths {
        let base = self.root.join(name);
        let storage = base.join("generated");
        ProfilePaths {
            resume_data: base.join("resume_data.json"),
            info: base.join("info.json"),
            prompts: base.join("prompts.json"),
            history: storage.join("history.json"),
            profile_history: storage.join("profile_history.json"),
            storage,
            base,
        }
    }

    pub fn active_paths(&self) -> ProfilePaths {
        self.paths(&self.active())
    }

    /// Lazily creates the `generated/` directory and empty logs.
    pub fn ensure_dirs(&self, name: &str) -> Result<(), StoreError> {
        let paths = self.paths(name);
        fs::create_dir_all(&paths.storage)?;

        if !paths.history.exists() {
            fs::write(&paths.history, "[]")?;
        }
        if !paths.profile_history.exists() {
            fs::write(&paths.profile_history, "[]")?;
        }
        Ok(())
    }

    /// Strips everything but alphanumerics, `-`, and `_` from a profile name.
    pub fn sanitize_name(name: &str) -> String {
        name.chars()
            .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
            .collect()
    }

    /// Creates a profile with empty content/info files.
    /// Returns the sanitized name actually used.
    pub fn create(&self, name: &str) -> Result<String, StoreError> {
        let name = Self::sanitize_name(name);
        if name.is_empty() {
            return Err(StoreError::InvalidOperation(
                "Profile name is required".to_string(),
            ));
        }

        let paths = self.paths(&name);
        if paths.base.exists() {
            return Err(StoreError::AlreadyExists(
                "Profile already exists".to_string(),
            ));
        }

        fs::create_dir_all(&paths.base)?;
        fs::write(&paths.resume_data, "{}")?;
        fs::write(&paths.info, "{}")?;
        self.ensure_dirs(&name)?;

        info!("Created profile '{name}'");
        Ok(name)
    }

    /// Sets the process-wide active profile. Last writer wins.
    pub fn switch(&self, name: &str) -> Result<(), StoreError> {
        if !self.paths(name).base.exists() {
            return Err(StoreError::NotFound("Profile does not exist".to_string()));
        }
        self.set_active(name);
        info!("Switched active profile to '{name}'");
        Ok(())
    }

    /// Recursively removes a profile. The default and active profiles are
    /// protected; those checks run before the existence check.
    pub fn delete(&self, name: &str) -> Result<(), StoreError> {
        if name == DEFAULT_PROFILE {
            return Err(StoreError::InvalidOperation(
                "Cannot delete default profile".to_string(),
            ));
        }
        if name == self.active() {
            return Err(StoreError::InvalidOperation(
                "Cannot delete active profile".to_string(),
            ));
        }

        let paths = self.paths(name);
        if !paths.base.exists() {
            return Err(StoreError::NotFound("Profile does not exist".to_string()));
        }

        fs::remove_dir_all(&paths.base)?;
        info!("Deleted profile '{name}'");
        Ok(())
    }

    /// All subdirectory names under the store root.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        fs::create_dir_all(&self.root)?;

        let mut profiles = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                profiles.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(profiles)
    }

    /// Moves any legacy root-level `resume_data.json` / `info.json` /
    /// `generated/` (siblings of the store root) into the `default` profile.
    /// Runs once at startup; a no-op when the default profile already exists.
    pub fn migrate_legacy_layout(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root)?;

        let default_dir = self.paths(DEFAULT_PROFILE).base;
        if default_dir.exists() {
            return Ok(());
        }
        fs::create_dir_all(&default_dir)?;

        let legacy_base = self
            .root
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        for file in ["resume_data.json", "info.json"] {
            let src = legacy_base.join(file);
            if src.exists() {
                fs::rename(&src, default_dir.join(file))?;
                info!("Migrated legacy {file} into default profile");
            } else if file == "resume_data.json" {
                fs::write(default_dir.join(file), "{}")?;
            }
        }

        let legacy_generated = legacy_base.join("generated");
        let target = default_dir.join("generated");
        if legacy_generated.exists() {
            if target.exists() {
                fs::remove_dir_all(&target)?;
            }
            fs::rename(&legacy_generated, &target)?;
            info!("Migrated legacy generated/ into default profile");
        } else {
            fs::create_dir_all(&target)?;
        }

        Ok(())
    }

    // JSON file helpers. Missing files read as the type's default; writes
    // rewrite the whole file in place.

    pub fn read_json<T: DeserializeOwned + Default>(&self, path: &Path) -> Result<T, StoreError> {
        if !path.exists() {
            return Ok(T::default());
        }
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Raw variant for endpoints that pass file contents through untyped.
    pub fn read_json_value(&self, path: &Path) -> Result<Value, StoreError> {
        if !path.exists() {
            return Ok(Value::Object(Default::default()));
        }
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), StoreError> {
        fs::write(path, serde_json::to_string_pretty(value)?)?;
        Ok(())
    }

    pub fn load_content(&self) -> Result<ContentSection, StoreError> {
        self.read_json(&self.active_paths().resume_data)
    }

    pub fn load_info(&self) -> Result<InfoSection, StoreError> {
        self.read_json(&self.active_paths().info)
    }

    pub fn save_content(&self, content: &ContentSection) -> Result<(), StoreError> {
        self.write_json(&self.active_paths().resume_data, content)
    }

    pub fn save_info(&self, info: &InfoSection) -> Result<(), StoreError> {
        self.write_json(&self.active_paths().info, info)
    }
}
