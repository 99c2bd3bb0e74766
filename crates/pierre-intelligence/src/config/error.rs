// ABOUTME: Configuration error types for diagnostic engine validation
// ABOUTME: Defines error variants for invalid ranges and inconsistent thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for diagnostic engine validation.

use pierre_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., a non-positive factor)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Two thresholds are ordered the wrong way round
    #[error("Inconsistent thresholds: {0}")]
    InconsistentThresholds(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string())
    }
}
