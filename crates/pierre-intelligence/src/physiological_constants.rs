// ABOUTME: Exercise-science constants used by the plan diagnostic rules
// ABOUTME: BMI bands, energy-expenditure factors, RPE intensity breakpoints and session buckets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants based on sports science guidelines
//!
//! Defaults for `DiagnosticConfig` and the fixed bucket edges of the
//! duration-keyed rules.

/// Body mass index bands
///
/// References:
/// - World Health Organization BMI classification
pub mod bmi {
    /// Below this value the user is classified as underweight
    pub const UNDERWEIGHT_THRESHOLD: f64 = 18.5;
    /// Above this value the user is classified as obese
    pub const OBESE_THRESHOLD: f64 = 30.0;
}

/// Session energy expenditure estimate
pub mod energy {
    /// kcal per kg of body weight per minute of resistance training
    pub const KCAL_PER_KG_MINUTE: f64 = 0.07;
    /// RPE midpoint at or below which a session counts as light
    pub const LIGHT_RPE_CEILING: f64 = 6.0;
    /// RPE midpoint at or below which a session counts as moderate
    pub const MODERATE_RPE_CEILING: f64 = 8.0;
    /// Multiplier for light sessions
    pub const LIGHT_INTENSITY_FACTOR: f64 = 0.85;
    /// Multiplier for moderate sessions
    pub const MODERATE_INTENSITY_FACTOR: f64 = 1.0;
    /// Multiplier for vigorous sessions
    pub const VIGOROUS_INTENSITY_FACTOR: f64 = 1.15;
    /// Calorie estimates are reported to this granularity
    pub const CALORIE_ROUNDING_STEP: f64 = 10.0;
}

/// Age-related programming adjustments
pub mod age {
    /// Above this age an extended joint warm-up is recommended
    pub const EXTENDED_WARMUP_AGE: u8 = 45;
}

/// Weekly frequency thresholds
pub mod frequency {
    /// At or below this many days hypertrophy progress is frequency-limited
    pub const LOW_HYPERTROPHY_FREQUENCY_DAYS: u8 = 2;
}

/// Limits on sensitive areas before the plan leans on substitutions
pub mod sensitivity {
    /// Above this many sensitive areas alternative exercises are prioritized
    pub const MAX_SENSITIVE_AREAS_WITHOUT_SUBSTITUTION: usize = 2;
}

/// Session-length bucket edges in minutes (inclusive upper bounds)
pub mod session_buckets {
    /// Short sessions
    pub const SHORT_MAX_MINUTES: u32 = 30;
    /// Standard sessions
    pub const STANDARD_MAX_MINUTES: u32 = 45;
    /// Long sessions; anything above is extended
    pub const LONG_MAX_MINUTES: u32 = 60;
}
