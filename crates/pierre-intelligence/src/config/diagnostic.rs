// ABOUTME: Diagnostic engine configuration for recommendation thresholds and calorie model
// ABOUTME: Defaults reproduce the standard rules; custom configs are validated before use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Diagnostic Engine Configuration
//!
//! Thresholds that trigger recommendations, the session calorie model and
//! the recommendation copy.

use super::error::ConfigError;
use crate::physiological_constants::{age, bmi, energy, frequency, sensitivity};
use serde::{Deserialize, Serialize};

/// Diagnostic Engine Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticConfig {
    /// Threshold values for triggering recommendations
    pub thresholds: RecommendationThresholds,
    /// Session calorie estimate parameters
    pub calories: CalorieModel,
    /// Recommendation copy, one message per rule
    pub messages: RecommendationMessages,
}

/// Thresholds for triggering recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationThresholds {
    /// BMI strictly above this suggests light activity on rest days
    pub obese_bmi: f64,
    /// BMI strictly below this (with a hypertrophy goal) suggests a caloric surplus
    pub underweight_bmi: f64,
    /// Age strictly above this suggests an extended warm-up
    pub extended_warmup_age: u8,
    /// Days at or below this (with a hypertrophy goal) suggest more frequency
    pub low_frequency_days: u8,
    /// Sensitive-area count strictly above this notes exercise substitutions
    pub max_sensitive_areas: usize,
}

/// Session calorie estimate parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalorieModel {
    /// kcal per kg per minute before the intensity factor
    pub kcal_per_kg_minute: f64,
    /// RPE midpoint ceiling for the light factor
    pub light_rpe_ceiling: f64,
    /// RPE midpoint ceiling for the moderate factor
    pub moderate_rpe_ceiling: f64,
    /// Multiplier for light sessions
    pub light_factor: f64,
    /// Multiplier for moderate sessions
    pub moderate_factor: f64,
    /// Multiplier for vigorous sessions
    pub vigorous_factor: f64,
}

/// Template messages for each recommendation rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationMessages {
    /// High BMI
    pub rest_day_activity: String,
    /// Low BMI with a hypertrophy goal
    pub caloric_surplus: String,
    /// Older trainees
    pub extended_warmup: String,
    /// Low frequency with a hypertrophy goal
    pub increase_frequency: String,
    /// Many sensitive areas
    pub exercise_substitutions: String,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            obese_bmi: bmi::OBESE_THRESHOLD,
            underweight_bmi: bmi::UNDERWEIGHT_THRESHOLD,
            extended_warmup_age: age::EXTENDED_WARMUP_AGE,
            low_frequency_days: frequency::LOW_HYPERTROPHY_FREQUENCY_DAYS,
            max_sensitive_areas: sensitivity::MAX_SENSITIVE_AREAS_WITHOUT_SUBSTITUTION,
        }
    }
}

impl Default for CalorieModel {
    fn default() -> Self {
        Self {
            kcal_per_kg_minute: energy::KCAL_PER_KG_MINUTE,
            light_rpe_ceiling: energy::LIGHT_RPE_CEILING,
            moderate_rpe_ceiling: energy::MODERATE_RPE_CEILING,
            light_factor: energy::LIGHT_INTENSITY_FACTOR,
            moderate_factor: energy::MODERATE_INTENSITY_FACTOR,
            vigorous_factor: energy::VIGOROUS_INTENSITY_FACTOR,
        }
    }
}

impl Default for RecommendationMessages {
    fn default() -> Self {
        Self {
            rest_day_activity: "Include light walking on your rest days".into(),
            caloric_surplus: "Watch your nutrition: a caloric surplus is essential".into(),
            extended_warmup: "A 5-10 minute joint warm-up is recommended".into(),
            increase_frequency: "Consider moving up to 3x per week when you can".into(),
            exercise_substitutions:
                "Alternative exercises will be prioritized for your sensitive areas".into(),
        }
    }
}

impl DiagnosticConfig {
    /// Validate thresholds and factors
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a factor or threshold is non-positive or if
    /// paired thresholds are inverted
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thresholds;
        if t.underweight_bmi <= 0.0 || t.obese_bmi <= 0.0 {
            return Err(ConfigError::InvalidRange("BMI thresholds must be positive"));
        }
        if t.underweight_bmi >= t.obese_bmi {
            return Err(ConfigError::InconsistentThresholds(
                "underweight BMI must be below obese BMI",
            ));
        }

        let c = &self.calories;
        if c.kcal_per_kg_minute <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "kcal per kg per minute must be positive",
            ));
        }
        if c.light_factor <= 0.0 || c.moderate_factor <= 0.0 || c.vigorous_factor <= 0.0 {
            return Err(ConfigError::InvalidRange("intensity factors must be positive"));
        }
        if c.light_rpe_ceiling > c.moderate_rpe_ceiling {
            return Err(ConfigError::InconsistentThresholds(
                "light RPE ceiling must not exceed moderate RPE ceiling",
            ));
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON, or a validation error
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(DiagnosticConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_bmi_thresholds_rejected() {
        let mut config = DiagnosticConfig::default();
        config.thresholds.underweight_bmi = 31.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InconsistentThresholds(_))
        ));
    }

    #[test]
    fn test_non_positive_factor_rejected() {
        let mut config = DiagnosticConfig::default();
        config.calories.vigorous_factor = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            DiagnosticConfig::from_json(r#"{"thresholds":{"extended_warmup_age":50}}"#).unwrap();
        assert_eq!(config.thresholds.extended_warmup_age, 50);
        assert!((config.thresholds.obese_bmi - 30.0).abs() < f64::EPSILON);
        assert_eq!(config.calories, CalorieModel::default());
    }

    #[test]
    fn test_partial_messages_override_keeps_other_defaults() {
        let config = DiagnosticConfig::from_json(
            r#"{"messages":{"rest_day_activity":"Go for a walk"}}"#,
        )
        .unwrap();
        let defaults = RecommendationMessages::default();
        assert_eq!(config.messages.rest_day_activity, "Go for a walk");
        assert_eq!(
            config.messages.exercise_substitutions,
            defaults.exercise_substitutions
        );
        assert!(defaults.exercise_substitutions.starts_with("Alternative exercises"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            DiagnosticConfig::from_json("{"),
            Err(ConfigError::Parse(_))
        ));
    }
}
