// ABOUTME: Configuration module for pierre-intelligence crate
// ABOUTME: Re-exports diagnostic engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Diagnostic engine thresholds, calorie model and recommendation copy
pub mod diagnostic;
/// Configuration validation errors
pub mod error;

pub use diagnostic::{
    CalorieModel, DiagnosticConfig, RecommendationMessages, RecommendationThresholds,
};
pub use error::ConfigError;
