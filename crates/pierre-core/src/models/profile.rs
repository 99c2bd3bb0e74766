// ABOUTME: Onboarding profile built incrementally by the wizard steps
// ABOUTME: Optional selections, defaulted numeric fields clamped to their bounds, muscle-group sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::vocabulary::{
    EquipmentType, ExperienceLevel, Gender, Goal, MuscleGroup, SessionDuration, SetupChoice,
};
use crate::constants::{profile_bounds, profile_defaults};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Profile collected by the onboarding wizard
///
/// Single-choice selections start unset. Numeric fields start at a baseline
/// and are clamped into their bounds by the setters, so a profile built
/// through this API is always within range. Unknown or missing fields in a
/// persisted record fall back to the defaults.
///
/// # Examples
///
/// ```rust
/// use pierre_core::models::{Goal, MuscleGroup, OnboardingProfile};
///
/// let mut profile = OnboardingProfile::default();
/// profile.goal = Some(Goal::Strength);
/// profile.set_available_days(9);
/// profile.toggle_sensitive(MuscleGroup::Back);
///
/// assert_eq!(profile.available_days, 7);
/// assert!(profile.sensitive_areas.contains(&MuscleGroup::Back));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingProfile {
    /// Primary training goal
    pub goal: Option<Goal>,
    /// Training experience
    pub experience_level: Option<ExperienceLevel>,
    /// Equipment access
    pub equipment_available: Option<EquipmentType>,
    /// How the first plan gets built
    pub setup_choice: Option<SetupChoice>,
    /// Gender, copy personalization only
    pub gender: Option<Gender>,
    /// Training days per week, 1-7
    pub available_days: u8,
    /// Session length
    pub session_duration: SessionDuration,
    /// Groups the user does not enjoy training
    pub disliked_muscle_groups: BTreeSet<MuscleGroup>,
    /// Groups with pain or injury history
    pub sensitive_areas: BTreeSet<MuscleGroup>,
    /// Age in years, 1-100
    pub age: u8,
    /// Body weight in kilograms, 30-200
    pub weight_kg: u16,
    /// Height in centimeters, 130-220
    pub height_cm: u16,
}

impl Default for OnboardingProfile {
    fn default() -> Self {
        Self {
            goal: None,
            experience_level: None,
            equipment_available: None,
            setup_choice: None,
            gender: None,
            available_days: profile_defaults::AVAILABLE_DAYS,
            session_duration: SessionDuration::default(),
            disliked_muscle_groups: BTreeSet::new(),
            sensitive_areas: BTreeSet::new(),
            age: profile_defaults::AGE,
            weight_kg: profile_defaults::WEIGHT_KG,
            height_cm: profile_defaults::HEIGHT_CM,
        }
    }
}

impl OnboardingProfile {
    /// Set training days per week, clamped to 1-7
    pub fn set_available_days(&mut self, days: u8) {
        self.available_days = days.clamp(
            profile_bounds::MIN_AVAILABLE_DAYS,
            profile_bounds::MAX_AVAILABLE_DAYS,
        );
    }

    /// Set age in years, clamped to 1-100
    pub fn set_age(&mut self, age: u8) {
        self.age = age.clamp(profile_bounds::MIN_AGE, profile_bounds::MAX_AGE);
    }

    /// Set weight in kilograms, clamped to 30-200
    pub fn set_weight_kg(&mut self, weight_kg: u16) {
        self.weight_kg =
            weight_kg.clamp(profile_bounds::MIN_WEIGHT_KG, profile_bounds::MAX_WEIGHT_KG);
    }

    /// Set height in centimeters, clamped to 130-220
    pub fn set_height_cm(&mut self, height_cm: u16) {
        self.height_cm =
            height_cm.clamp(profile_bounds::MIN_HEIGHT_CM, profile_bounds::MAX_HEIGHT_CM);
    }

    /// Add the group to the disliked set, or remove it if already present
    pub fn toggle_disliked(&mut self, group: MuscleGroup) {
        if !self.disliked_muscle_groups.remove(&group) {
            self.disliked_muscle_groups.insert(group);
        }
    }

    /// Add the group to the sensitive set, or remove it if already present
    pub fn toggle_sensitive(&mut self, group: MuscleGroup) {
        if !self.sensitive_areas.remove(&group) {
            self.sensitive_areas.insert(group);
        }
    }

    /// Union of disliked and sensitive groups
    ///
    /// The two sets may overlap; a group in both is simply excluded once.
    #[must_use]
    pub fn excluded_muscle_groups(&self) -> BTreeSet<MuscleGroup> {
        self.disliked_muscle_groups
            .union(&self.sensitive_areas)
            .copied()
            .collect()
    }

    /// Clamp every numeric field into its bounds
    ///
    /// Used after deserializing records written by other tools.
    pub fn normalize(&mut self) {
        self.set_available_days(self.available_days);
        self.set_age(self.age);
        self.set_weight_kg(self.weight_kg);
        self.set_height_cm(self.height_cm);
    }

    /// Whether every selection required before the terminal step is set
    #[must_use]
    pub const fn has_required_selections(&self) -> bool {
        self.goal.is_some()
            && self.experience_level.is_some()
            && self.equipment_available.is_some()
            && self.setup_choice.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_empty_with_baselines() {
        let profile = OnboardingProfile::default();
        assert!(profile.goal.is_none());
        assert!(profile.experience_level.is_none());
        assert_eq!(profile.available_days, 3);
        assert_eq!(profile.session_duration.minutes(), 45);
        assert_eq!(profile.age, 25);
        assert!(profile.disliked_muscle_groups.is_empty());
        assert!(!profile.has_required_selections());
    }

    #[test]
    fn test_setters_clamp_to_bounds() {
        let mut profile = OnboardingProfile::default();
        profile.set_available_days(0);
        profile.set_age(150);
        profile.set_weight_kg(10);
        profile.set_height_cm(300);
        assert_eq!(profile.available_days, 1);
        assert_eq!(profile.age, 100);
        assert_eq!(profile.weight_kg, 30);
        assert_eq!(profile.height_cm, 220);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut profile = OnboardingProfile::default();
        profile.toggle_disliked(MuscleGroup::Legs);
        assert!(profile.disliked_muscle_groups.contains(&MuscleGroup::Legs));
        profile.toggle_disliked(MuscleGroup::Legs);
        assert!(profile.disliked_muscle_groups.is_empty());
    }

    #[test]
    fn test_excluded_groups_allow_overlap() {
        let mut profile = OnboardingProfile::default();
        profile.toggle_disliked(MuscleGroup::Core);
        profile.toggle_sensitive(MuscleGroup::Core);
        profile.toggle_sensitive(MuscleGroup::Back);
        let excluded: Vec<_> = profile.excluded_muscle_groups().into_iter().collect();
        assert_eq!(excluded, vec![MuscleGroup::Back, MuscleGroup::Core]);
    }

    #[test]
    fn test_partial_record_deserializes_with_defaults() {
        let profile: OnboardingProfile =
            serde_json::from_str(r#"{"goal":"strength","session_duration":60}"#).unwrap();
        assert_eq!(profile.goal, Some(Goal::Strength));
        assert_eq!(profile.session_duration, SessionDuration::Sixty);
        assert_eq!(profile.available_days, 3);
        assert_eq!(profile.height_cm, 170);
    }

    #[test]
    fn test_normalize_clamps_foreign_records() {
        let mut profile: OnboardingProfile =
            serde_json::from_str(r#"{"available_days":12,"weight_kg":5}"#).unwrap();
        profile.normalize();
        assert_eq!(profile.available_days, 7);
        assert_eq!(profile.weight_kg, 30);
    }
}
