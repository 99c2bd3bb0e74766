// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Profile bounds and defaults used by the onboarding wizard and diagnostic engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file.

/// Inclusive bounds for numeric profile fields
pub mod profile_bounds {
    /// Minimum training days per week
    pub const MIN_AVAILABLE_DAYS: u8 = 1;
    /// Maximum training days per week
    pub const MAX_AVAILABLE_DAYS: u8 = 7;
    /// Minimum age in years
    pub const MIN_AGE: u8 = 1;
    /// Maximum age in years
    pub const MAX_AGE: u8 = 100;
    /// Minimum body weight in kilograms
    pub const MIN_WEIGHT_KG: u16 = 30;
    /// Maximum body weight in kilograms
    pub const MAX_WEIGHT_KG: u16 = 200;
    /// Minimum height in centimeters
    pub const MIN_HEIGHT_CM: u16 = 130;
    /// Maximum height in centimeters
    pub const MAX_HEIGHT_CM: u16 = 220;
}

/// Values a freshly created profile starts with
pub mod profile_defaults {
    /// Default training days per week
    pub const AVAILABLE_DAYS: u8 = 3;
    /// Default session length in minutes
    pub const SESSION_DURATION_MINUTES: u32 = 45;
    /// Baseline age shown by the age slider
    pub const AGE: u8 = 25;
    /// Baseline weight shown by the weight picker
    pub const WEIGHT_KG: u16 = 70;
    /// Baseline height shown by the height picker
    pub const HEIGHT_CM: u16 = 170;
}
