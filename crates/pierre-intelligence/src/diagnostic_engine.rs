// ABOUTME: Plan diagnostic engine mapping a completed onboarding profile to a training plan summary
// ABOUTME: Pure and deterministic composition of the prescription, metrics and recommendation rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Plan diagnostic engine
//!
//! `diagnose` is total: a profile with missing selections falls back to
//! `Goal::GeneralHealth` and `ExperienceLevel::Beginner` rather than failing.

use crate::body_metrics::{bmi, estimated_session_calories, weekly_training_minutes};
use crate::config::{ConfigError, DiagnosticConfig};
use crate::narrative::{personalized_greeting, results_milestones};
use crate::prescription::{
    exercises_per_session, rep_range, rest_between_sets, rpe_range, split_frequency_label,
    split_name, time_to_results, volume_range,
};
use crate::recommendation_engine::{priority_muscle_groups, RecommendationEngine};
use pierre_core::models::{
    BmiCategory, CommitmentLevel, ExperienceLevel, Goal, OnboardingProfile, PlanDiagnostic,
};
use tracing::debug;

/// Derives a `PlanDiagnostic` from an onboarding profile
#[derive(Debug, Clone, Default)]
pub struct PlanDiagnosticEngine {
    config: DiagnosticConfig,
}

impl PlanDiagnosticEngine {
    /// Create an engine with the default thresholds and copy
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration fails validation
    pub fn with_config(config: DiagnosticConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &DiagnosticConfig {
        &self.config
    }

    /// Compute the plan diagnostic for a profile
    #[must_use]
    pub fn diagnose(&self, profile: &OnboardingProfile) -> PlanDiagnostic {
        let goal = profile.goal.unwrap_or(Goal::GeneralHealth);
        let level = profile.experience_level.unwrap_or(ExperienceLevel::Beginner);
        let days = profile.available_days;
        let minutes = profile.session_duration.minutes();

        let rpe = rpe_range(level, goal);
        let body_mass_index = bmi(profile.weight_kg, profile.height_cm);
        let estimated_calories =
            estimated_session_calories(profile.weight_kg, minutes, rpe, &self.config.calories);
        let time_to_results_weeks = time_to_results(goal, level);

        let recommendations =
            RecommendationEngine::new(&self.config.thresholds, &self.config.messages)
                .generate_recommendations(profile, goal, body_mass_index);

        let diagnostic = PlanDiagnostic {
            split_name: split_name(days, level).to_owned(),
            split_frequency_label: split_frequency_label(days),
            volume_range: volume_range(level, goal).to_owned(),
            rep_range: rep_range(goal).to_owned(),
            rpe_range: rpe.label(),
            exercises_per_session: exercises_per_session(minutes).to_owned(),
            rest_between_sets_label: rest_between_sets(minutes).to_owned(),
            estimated_calories,
            time_to_results_weeks: time_to_results_weeks.to_owned(),
            priority_muscle_groups: priority_muscle_groups(profile),
            recommendations,
            personalized_greeting: personalized_greeting(goal, level),
            goal_icon: goal.icon().to_owned(),
            bmi: body_mass_index,
            bmi_category: BmiCategory::from_bmi(body_mass_index),
            commitment_level: CommitmentLevel::from_days(days),
            weekly_training_minutes: weekly_training_minutes(days, minutes),
            results_milestones: results_milestones(time_to_results_weeks),
        };

        debug!(
            goal = goal.as_str(),
            level = level.as_str(),
            split = %diagnostic.split_name,
            calories = diagnostic.estimated_calories,
            recommendations = diagnostic.recommendations.len(),
            "Plan diagnostic computed"
        );

        diagnostic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile_uses_fallback_selections() {
        let engine = PlanDiagnosticEngine::new();
        let diagnostic = engine.diagnose(&OnboardingProfile::default());
        assert_eq!(diagnostic.rep_range, "10-15");
        assert_eq!(diagnostic.volume_range, "6-8");
        assert_eq!(diagnostic.split_name, "Full Body");
        assert_eq!(diagnostic.split_frequency_label, "3x per week");
        assert_eq!(diagnostic.goal_icon, Goal::GeneralHealth.icon());
        assert_eq!(diagnostic.priority_muscle_groups.len(), 8);
    }

    #[test]
    fn test_custom_config_changes_thresholds() {
        let mut config = DiagnosticConfig::default();
        config.thresholds.extended_warmup_age = 20;
        let engine = PlanDiagnosticEngine::with_config(config).unwrap();
        let diagnostic = engine.diagnose(&OnboardingProfile::default());
        assert_eq!(
            diagnostic.recommendations,
            vec![engine.config().messages.extended_warmup.clone()]
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = DiagnosticConfig::default();
        config.calories.kcal_per_kg_minute = -1.0;
        assert!(PlanDiagnosticEngine::with_config(config).is_err());
    }
}
