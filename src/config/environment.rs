// ABOUTME: Environment-based configuration for the onboarding store and diagnostic engine
// ABOUTME: Resolves data directory, backend selection and optional engine overrides from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use pierre_intelligence::{DiagnosticConfig, PlanDiagnosticEngine};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Data directory override
pub const DATA_DIR_ENV: &str = "PIERRE_ONBOARDING_DATA_DIR";
/// Backend selection (`file` or `memory`)
pub const STORE_ENV: &str = "PIERRE_ONBOARDING_STORE";
/// Path to a JSON `DiagnosticConfig`
pub const DIAGNOSTIC_CONFIG_ENV: &str = "PIERRE_ONBOARDING_DIAGNOSTIC_CONFIG";

/// Application directory name under the platform data directory
const APP_DIR_NAME: &str = "pierre-onboarding";
/// Fallback data directory when the platform has none
const FALLBACK_DATA_DIR: &str = "./data";

/// Preference backend selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// Persist under the data directory
    #[default]
    File,
    /// Keep preferences in memory for the life of the process
    Memory,
}

impl StoreKind {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "mem" | "in-memory" => Self::Memory,
            "file" | "files" | "disk" => Self::File,
            other => {
                warn!(value = other, "Unrecognized store kind, using file store");
                Self::File
            }
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Onboarding runtime configuration
#[derive(Debug, Clone)]
pub struct OnboardingConfig {
    /// Directory for the file store
    pub data_dir: PathBuf,
    /// Preference backend
    pub store: StoreKind,
    /// Optional JSON file overriding diagnostic thresholds and copy
    pub diagnostic_config_path: Option<PathBuf>,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            store: StoreKind::default(),
            diagnostic_config_path: None,
        }
    }
}

impl OnboardingConfig {
    /// Load configuration from environment variables
    ///
    /// Install logging first so the summary and fallback warnings are recorded.
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self {
            data_dir: env::var(DATA_DIR_ENV)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map_or_else(default_data_dir, PathBuf::from),
            store: env::var(STORE_ENV)
                .map(|v| StoreKind::from_str_or_default(&v))
                .unwrap_or_default(),
            diagnostic_config_path: env::var(DIAGNOSTIC_CONFIG_ENV)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        };
        info!("{}", config.summary());
        config
    }

    /// Replace the data directory
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Build the diagnostic engine, applying the configured override file
    ///
    /// # Errors
    ///
    /// Returns an error if the override file cannot be read or fails validation
    pub fn diagnostic_engine(&self) -> AppResult<PlanDiagnosticEngine> {
        let Some(path) = &self.diagnostic_config_path else {
            return Ok(PlanDiagnosticEngine::new());
        };
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!(
                "cannot read diagnostic config {}: {e}",
                path.display()
            ))
            .with_source(e)
        })?;
        let config = DiagnosticConfig::from_json(&json)?;
        info!(path = %path.display(), "Loaded diagnostic config override");
        Ok(PlanDiagnosticEngine::with_config(config)?)
    }

    /// One-line description for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "store={} data_dir={} diagnostic_config={}",
            self.store,
            self.data_dir.display(),
            self.diagnostic_config_path
                .as_ref()
                .map_or_else(|| "default".to_owned(), |p| p.display().to_string())
        )
    }
}

/// Platform data directory for the application, or `./data`
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir().map_or_else(
        || PathBuf::from(FALLBACK_DATA_DIR),
        |dir| dir.join(APP_DIR_NAME),
    )
}
