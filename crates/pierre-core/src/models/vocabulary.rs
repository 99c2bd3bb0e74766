// ABOUTME: Closed domain vocabulary for the onboarding profile (goal, level, muscle groups, etc.)
// ABOUTME: Enum identity is kept separate from display copy and icon metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};

/// Primary training goal chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Build muscle mass
    Hypertrophy,
    /// Lose body weight
    WeightLoss,
    /// Build maximal strength
    Strength,
    /// Stay active and healthy
    GeneralHealth,
    /// Improve muscular endurance
    Endurance,
}

impl Goal {
    /// Every goal in declaration order
    pub const ALL: [Self; 5] = [
        Self::Hypertrophy,
        Self::WeightLoss,
        Self::Strength,
        Self::GeneralHealth,
        Self::Endurance,
    ];

    /// Stable identifier used in storage and CLI arguments
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hypertrophy => "hypertrophy",
            Self::WeightLoss => "weight_loss",
            Self::Strength => "strength",
            Self::GeneralHealth => "general_health",
            Self::Endurance => "endurance",
        }
    }

    /// Label shown on the selection card
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Hypertrophy => "Build muscle",
            Self::WeightLoss => "Lose weight",
            Self::Strength => "Get stronger",
            Self::GeneralHealth => "General health",
            Self::Endurance => "Endurance",
        }
    }

    /// Icon identifier (opaque to the core)
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Hypertrophy => "figure.strengthtraining.traditional",
            Self::WeightLoss => "flame.fill",
            Self::Strength => "bolt.fill",
            Self::GeneralHealth => "heart.fill",
            Self::Endurance => "figure.run",
        }
    }
}

/// Self-reported training experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// Starting out or returning after a long break
    Beginner,
    /// Trains consistently and knows the basic lifts
    Intermediate,
    /// Long training history, optimizing results
    Advanced,
}

impl ExperienceLevel {
    /// Every level in declaration order
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Stable identifier used in storage and CLI arguments
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Label shown on the selection card
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Secondary line shown on the selection card
    #[must_use]
    pub const fn subtitle(&self) -> &'static str {
        match self {
            Self::Beginner => "I'm just starting or coming back after time off",
            Self::Intermediate => "I train consistently and know the basic exercises",
            Self::Advanced => "I've trained for a long time and want to optimize my results",
        }
    }

    /// Icon identifier (opaque to the core)
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Beginner => "figure.walk",
            Self::Intermediate => "figure.strengthtraining.traditional",
            Self::Advanced => "figure.highintensity.intervaltraining",
        }
    }
}

/// Trainable muscle group
///
/// Declaration order is significant: it is the `Ord` order and the order in
/// which priority groups are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Lats, traps and spinal erectors
    Back,
    /// Deltoids
    Shoulders,
    /// Biceps
    Biceps,
    /// Triceps
    Triceps,
    /// Quadriceps, hamstrings and calves
    Legs,
    /// Abdominals and obliques
    Core,
    /// Glutes
    Glutes,
}

impl MuscleGroup {
    /// Every muscle group in declaration order
    pub const ALL: [Self; 8] = [
        Self::Chest,
        Self::Back,
        Self::Shoulders,
        Self::Biceps,
        Self::Triceps,
        Self::Legs,
        Self::Core,
        Self::Glutes,
    ];

    /// Stable identifier used in storage and CLI arguments
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Shoulders => "shoulders",
            Self::Biceps => "biceps",
            Self::Triceps => "triceps",
            Self::Legs => "legs",
            Self::Core => "core",
            Self::Glutes => "glutes",
        }
    }

    /// Label shown on chips and cards
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Chest => "Chest",
            Self::Back => "Back",
            Self::Shoulders => "Shoulders",
            Self::Biceps => "Biceps",
            Self::Triceps => "Triceps",
            Self::Legs => "Legs",
            Self::Core => "Core",
            Self::Glutes => "Glutes",
        }
    }

    /// Icon identifier (opaque to the core)
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Chest => "figure.arms.open",
            Self::Back => "figure.cross.training",
            Self::Shoulders => "figure.boxing",
            Self::Biceps => "figure.strengthtraining.traditional",
            Self::Triceps => "figure.cooldown",
            Self::Legs => "figure.run",
            Self::Core => "figure.core.training",
            Self::Glutes => "figure.step.training",
        }
    }
}

/// Equipment the user has access to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    /// Commercial gym with full equipment
    FullGym,
    /// A few pieces of equipment at home
    HomeBasic,
    /// No equipment at all
    BodyweightOnly,
}

impl EquipmentType {
    /// Every equipment option in declaration order
    pub const ALL: [Self; 3] = [Self::FullGym, Self::HomeBasic, Self::BodyweightOnly];

    /// Label shown on the selection card
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::FullGym => "Full gym",
            Self::HomeBasic => "Basic home gym",
            Self::BodyweightOnly => "Bodyweight",
        }
    }

    /// Secondary line shown on the selection card
    #[must_use]
    pub const fn subtitle(&self) -> &'static str {
        match self {
            Self::FullGym => "I have access to all the equipment",
            Self::HomeBasic => "I have some equipment at home",
            Self::BodyweightOnly => "I train without equipment",
        }
    }

    /// Icon identifier (opaque to the core)
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::FullGym => "building.2.fill",
            Self::HomeBasic => "house.fill",
            Self::BodyweightOnly => "figure.flexibility",
        }
    }
}

/// Gender, used only to personalize copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// User chose not to answer
    PreferNotToSay,
}

impl Gender {
    /// Every option in declaration order
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::PreferNotToSay];

    /// Label shown on the selection card
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::PreferNotToSay => "Prefer not to say",
        }
    }

    /// Icon identifier (opaque to the core)
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Male => "figure.stand",
            Self::Female => "figure.stand.dress",
            Self::PreferNotToSay => "person.fill.questionmark",
        }
    }
}

/// How the first workout plan gets built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupChoice {
    /// Let the engine build a personalized plan (recommended)
    AssistedByEngine,
    /// The user enters their own exercises
    Manual,
}

impl SetupChoice {
    /// Label shown on the selection card
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::AssistedByEngine => "Build it for me",
            Self::Manual => "Create manually",
        }
    }

    /// Secondary line shown on the selection card
    #[must_use]
    pub const fn subtitle(&self) -> &'static str {
        match self {
            Self::AssistedByEngine => "Personalized plan based on your profile",
            Self::Manual => "I'd rather enter my own exercises",
        }
    }

    /// Icon identifier (opaque to the core)
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::AssistedByEngine => "sparkles",
            Self::Manual => "pencil.and.list.clipboard",
        }
    }
}

/// Session length options offered by the availability step
///
/// Serialized as the number of minutes; any other number is rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub enum SessionDuration {
    /// 30 minutes
    Thirty,
    /// 45 minutes
    #[default]
    FortyFive,
    /// 60 minutes
    Sixty,
    /// 90 minutes
    Ninety,
}

impl SessionDuration {
    /// Every option in ascending order
    pub const ALL: [Self; 4] = [Self::Thirty, Self::FortyFive, Self::Sixty, Self::Ninety];

    /// Session length in minutes
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        match self {
            Self::Thirty => 30,
            Self::FortyFive => 45,
            Self::Sixty => 60,
            Self::Ninety => 90,
        }
    }

    /// Short label shown under the option
    #[must_use]
    pub const fn intensity_label(&self) -> &'static str {
        match self {
            Self::Thirty => "Quick",
            Self::FortyFive => "Balanced",
            Self::Sixty => "Complete",
            Self::Ninety => "Intense",
        }
    }
}

impl TryFrom<u32> for SessionDuration {
    type Error = AppError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|d| d.minutes() == minutes)
            .ok_or_else(|| {
                AppError::out_of_range(format!(
                    "session duration must be one of 30, 45, 60 or 90 minutes, got {minutes}"
                ))
            })
    }
}

impl From<SessionDuration> for u32 {
    fn from(duration: SessionDuration) -> Self {
        duration.minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::profile_defaults;

    #[test]
    fn test_muscle_group_order_matches_declaration() {
        let mut sorted = MuscleGroup::ALL;
        sorted.sort();
        assert_eq!(sorted, MuscleGroup::ALL);
        assert_eq!(MuscleGroup::ALL[0], MuscleGroup::Chest);
        assert_eq!(MuscleGroup::ALL[7], MuscleGroup::Glutes);
    }

    #[test]
    fn test_goal_serializes_as_identity_not_copy() {
        let json = serde_json::to_string(&Goal::WeightLoss).unwrap();
        assert_eq!(json, "\"weight_loss\"");
        assert_eq!(Goal::WeightLoss.as_str(), "weight_loss");
        assert_eq!(Goal::WeightLoss.display_name(), "Lose weight");
    }

    #[test]
    fn test_session_duration_accepts_catalogue_values() {
        for minutes in [30, 45, 60, 90] {
            let duration = SessionDuration::try_from(minutes).unwrap();
            assert_eq!(duration.minutes(), minutes);
        }
    }

    #[test]
    fn test_session_duration_rejects_other_values() {
        assert!(SessionDuration::try_from(50).is_err());
        assert!(serde_json::from_str::<SessionDuration>("20").is_err());
        assert_eq!(
            serde_json::from_str::<SessionDuration>("90").unwrap(),
            SessionDuration::Ninety
        );
    }

    #[test]
    fn test_session_duration_default_is_forty_five() {
        assert_eq!(
            SessionDuration::default().minutes(),
            profile_defaults::SESSION_DURATION_MINUTES
        );
    }
}
