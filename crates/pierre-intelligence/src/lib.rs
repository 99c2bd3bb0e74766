// ABOUTME: Plan diagnostic engine for the Pierre onboarding platform
// ABOUTME: Table-driven prescription rules, body metrics, recommendations and narrative copy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Intelligence
//!
//! Derives a personalized `PlanDiagnostic` from an `OnboardingProfile`.
//! Every derivation is a pure function of the profile and the engine's
//! `DiagnosticConfig`, so repeated calls return identical results.
//!
//! ```rust
//! use pierre_core::models::{ExperienceLevel, Goal, OnboardingProfile};
//! use pierre_intelligence::PlanDiagnosticEngine;
//!
//! let mut profile = OnboardingProfile::default();
//! profile.goal = Some(Goal::Strength);
//! profile.experience_level = Some(ExperienceLevel::Intermediate);
//! profile.set_available_days(4);
//!
//! let diagnostic = PlanDiagnosticEngine::new().diagnose(&profile);
//! assert_eq!(diagnostic.split_name, "Upper/Lower");
//! assert_eq!(diagnostic.rep_range, "3-6");
//! ```

/// Engine configuration and validation errors
pub mod config;

/// Exercise-science constants backing the default configuration
pub mod physiological_constants;

/// Split, volume, rep, RPE, session and timeline tables
pub mod prescription;

/// BMI, calorie and weekly volume calculations
pub mod body_metrics;

/// Recommendation rules and muscle-group prioritization
pub mod recommendation_engine;

/// Greeting and results timeline copy
pub mod narrative;

/// Profile to diagnostic composition
pub mod diagnostic_engine;

pub use config::{ConfigError, DiagnosticConfig};
pub use diagnostic_engine::PlanDiagnosticEngine;
