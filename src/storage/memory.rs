// ABOUTME: In-memory key-value backend for the preference store
// ABOUTME: Used for tests and for sessions that must not touch the filesystem
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::KeyValueBackend;
use crate::errors::{AppError, AppResult};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory backend
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    store: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryBackend {
    /// Create an empty backend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned
    pub fn len(&self) -> AppResult<usize> {
        let guard = self
            .store
            .read()
            .map_err(|e| AppError::internal(format!("preference lock poisoned: {e}")))?;
        Ok(guard.len())
    }

    /// Whether no keys are stored
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned
    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl KeyValueBackend for InMemoryBackend {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let guard = self
            .store
            .read()
            .map_err(|e| AppError::internal(format!("preference lock poisoned: {e}")))?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut guard = self
            .store
            .write()
            .map_err(|e| AppError::internal(format!("preference lock poisoned: {e}")))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut guard = self
            .store
            .write()
            .map_err(|e| AppError::internal(format!("preference lock poisoned: {e}")))?;
        guard.remove(key);
        Ok(())
    }
}
