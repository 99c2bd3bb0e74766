// ABOUTME: File-per-key backend for the preference store
// ABOUTME: Each key maps to one file in the data directory, written via temp file and rename
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::KeyValueBackend;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extension appended to every key file
const KEY_FILE_EXTENSION: &str = "pref";

/// Directory-backed key-value backend
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Open (creating if needed) a backend rooted at `root`
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created
    pub fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            AppError::storage(format!(
                "cannot create data directory {}: {e}",
                root.display()
            ))
            .with_source(e)
        })?;
        debug!(path = %root.display(), "Opened file preference backend");
        Ok(Self { root })
    }

    /// Data directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(AppError::invalid_input(format!(
                "invalid preference key: {key:?}"
            )));
        }
        Ok(self.root.join(format!("{key}.{KEY_FILE_EXTENSION}")))
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.key_path(key)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        String::from_utf8(bytes).map(Some).map_err(|e| {
            AppError::serialization(format!("{} is not valid UTF-8", path.display()))
                .with_source(e)
        })
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.key_path(key)?;
        let staging = path.with_extension(format!("{KEY_FILE_EXTENSION}.tmp"));
        fs::write(&staging, value)?;
        fs::rename(&staging, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_and_missing_key() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();

        assert_eq!(backend.get("app_state").unwrap(), None);
        backend.set("app_state", "guest").unwrap();
        assert_eq!(backend.get("app_state").unwrap().as_deref(), Some("guest"));
        assert!(dir.path().join("app_state.pref").exists());

        backend.remove("app_state").unwrap();
        backend.remove("app_state").unwrap();
        assert_eq!(backend.get("app_state").unwrap(), None);
    }

    #[test]
    fn test_open_creates_nested_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let backend = FileBackend::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(backend.root(), nested.as_path());
    }

    #[test]
    fn test_non_utf8_file_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();
        fs::write(dir.path().join("app_state.pref"), [0xff, 0xfe]).unwrap();

        let error = backend.get("app_state").unwrap_err();
        assert_eq!(error.code, ErrorCode::SerializationError);
    }

    #[test]
    fn test_path_traversal_keys_rejected() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();
        assert!(backend.set("../escape", "x").is_err());
        assert!(backend.get("").is_err());
    }
}
