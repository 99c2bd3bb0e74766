// ABOUTME: Configuration module for the onboarding runtime
// ABOUTME: Environment-driven store selection, data directory and diagnostic overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment configuration
pub mod environment;

pub use environment::{OnboardingConfig, StoreKind};
