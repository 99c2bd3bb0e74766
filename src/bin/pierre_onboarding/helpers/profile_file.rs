// ABOUTME: Profile file loading for pierre-onboarding
// ABOUTME: Reads a JSON onboarding profile and clamps its numeric fields into bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_core::models::OnboardingProfile;
use pierre_onboarding::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read and normalize a JSON profile
pub fn load(path: &Path) -> AppResult<OnboardingProfile> {
    let json = fs::read_to_string(path).map_err(|e| {
        AppError::not_found(format!("profile file {}", path.display())).with_source(e)
    })?;
    let mut profile: OnboardingProfile = serde_json::from_str(&json).map_err(|e| {
        AppError::invalid_input(format!("invalid profile {}: {e}", path.display())).with_source(e)
    })?;
    profile.normalize();
    debug!(path = %path.display(), "Loaded profile file");
    Ok(profile)
}
