// ABOUTME: Risk-aware recommendation rules and muscle-group prioritization for new plans
// ABOUTME: Evaluates BMI, age, frequency and sensitivity thresholds in a fixed order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Plan recommendation engine
//!
//! Rules are evaluated in a fixed order and are not mutually exclusive; a
//! profile can trigger any subset of them.

use crate::config::{RecommendationMessages, RecommendationThresholds};
use pierre_core::models::{Goal, MuscleGroup, OnboardingProfile};
use tracing::debug;

/// Recommendation rule identifiers, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationRule {
    /// BMI above the obese threshold
    RestDayActivity,
    /// BMI below the underweight threshold with a hypertrophy goal
    CaloricSurplus,
    /// Age above the warm-up threshold
    ExtendedWarmup,
    /// Few training days with a hypertrophy goal
    IncreaseFrequency,
    /// More sensitive areas than the substitution threshold
    ExerciseSubstitutions,
}

impl RecommendationRule {
    /// All rules in evaluation order
    pub const ALL: [Self; 5] = [
        Self::RestDayActivity,
        Self::CaloricSurplus,
        Self::ExtendedWarmup,
        Self::IncreaseFrequency,
        Self::ExerciseSubstitutions,
    ];

    /// Message text for this rule
    #[must_use]
    pub fn message(self, messages: &RecommendationMessages) -> &str {
        match self {
            Self::RestDayActivity => &messages.rest_day_activity,
            Self::CaloricSurplus => &messages.caloric_surplus,
            Self::ExtendedWarmup => &messages.extended_warmup,
            Self::IncreaseFrequency => &messages.increase_frequency,
            Self::ExerciseSubstitutions => &messages.exercise_substitutions,
        }
    }
}

/// Evaluates recommendation rules against a profile
pub struct RecommendationEngine<'a> {
    thresholds: &'a RecommendationThresholds,
    messages: &'a RecommendationMessages,
}

impl<'a> RecommendationEngine<'a> {
    /// Create an engine over borrowed thresholds and copy
    #[must_use]
    pub const fn new(
        thresholds: &'a RecommendationThresholds,
        messages: &'a RecommendationMessages,
    ) -> Self {
        Self {
            thresholds,
            messages,
        }
    }

    /// Whether a single rule fires for the profile
    #[must_use]
    pub fn applies(
        &self,
        rule: RecommendationRule,
        profile: &OnboardingProfile,
        goal: Goal,
        bmi: f64,
    ) -> bool {
        let t = self.thresholds;
        match rule {
            RecommendationRule::RestDayActivity => bmi > t.obese_bmi,
            RecommendationRule::CaloricSurplus => {
                bmi < t.underweight_bmi && goal == Goal::Hypertrophy
            }
            RecommendationRule::ExtendedWarmup => profile.age > t.extended_warmup_age,
            RecommendationRule::IncreaseFrequency => {
                profile.available_days <= t.low_frequency_days && goal == Goal::Hypertrophy
            }
            RecommendationRule::ExerciseSubstitutions => {
                profile.sensitive_areas.len() > t.max_sensitive_areas
            }
        }
    }

    /// Rules that fire for the profile, in evaluation order
    #[must_use]
    pub fn triggered_rules(
        &self,
        profile: &OnboardingProfile,
        goal: Goal,
        bmi: f64,
    ) -> Vec<RecommendationRule> {
        RecommendationRule::ALL
            .into_iter()
            .filter(|rule| self.applies(*rule, profile, goal, bmi))
            .collect()
    }

    /// Recommendation messages for the profile, in evaluation order
    #[must_use]
    pub fn generate_recommendations(
        &self,
        profile: &OnboardingProfile,
        goal: Goal,
        bmi: f64,
    ) -> Vec<String> {
        let rules = self.triggered_rules(profile, goal, bmi);
        debug!(count = rules.len(), ?rules, "Recommendation rules triggered");
        rules
            .into_iter()
            .map(|rule| rule.message(self.messages).to_owned())
            .collect()
    }
}

/// Muscle groups neither disliked nor sensitive, in declaration order
#[must_use]
pub fn priority_muscle_groups(profile: &OnboardingProfile) -> Vec<MuscleGroup> {
    let excluded = profile.excluded_muscle_groups();
    MuscleGroup::ALL
        .into_iter()
        .filter(|group| !excluded.contains(group))
        .collect()
}
