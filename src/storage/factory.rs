// ABOUTME: Preference backend factory for configuration-based backend selection
// ABOUTME: Wraps the file and in-memory backends behind one KeyValueBackend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{FileBackend, InMemoryBackend, KeyValueBackend, PreferencesManager};
use crate::config::environment::{OnboardingConfig, StoreKind};
use crate::errors::AppResult;
use tracing::info;

/// Unified preference backend
#[derive(Debug, Clone)]
pub enum StoreBackend {
    /// Files under the data directory
    File(FileBackend),
    /// Process memory only
    Memory(InMemoryBackend),
}

impl StoreBackend {
    /// Create the backend selected by configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the file backend's directory cannot be created
    pub fn from_config(config: &OnboardingConfig) -> AppResult<Self> {
        match config.store {
            StoreKind::File => {
                info!(path = %config.data_dir.display(), "Using file preference store");
                Ok(Self::File(FileBackend::open(&config.data_dir)?))
            }
            StoreKind::Memory => {
                info!("Using in-memory preference store");
                Ok(Self::Memory(InMemoryBackend::new()))
            }
        }
    }

    /// Preference store over the configured backend
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be created
    pub fn open_store(config: &OnboardingConfig) -> AppResult<PreferencesManager<Self>> {
        Ok(PreferencesManager::new(Self::from_config(config)?))
    }
}

impl KeyValueBackend for StoreBackend {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        match self {
            Self::File(backend) => backend.get(key),
            Self::Memory(backend) => backend.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        match self {
            Self::File(backend) => backend.set(key, value),
            Self::Memory(backend) => backend.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        match self {
            Self::File(backend) => backend.remove(key),
            Self::Memory(backend) => backend.remove(key),
        }
    }
}
