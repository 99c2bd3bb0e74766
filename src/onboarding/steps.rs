// ABOUTME: Onboarding wizard steps, their completion predicates and the configurable step order
// ABOUTME: StepSequence parameterizes the state machine so the set of stages can change freely
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use pierre_core::models::OnboardingProfile;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Minimum number of steps a wizard can have
pub const MIN_STEPS: usize = 2;

/// Data-collection stage of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    /// Introduction
    Welcome,
    /// Gender selection (required)
    Gender,
    /// Goal selection (required)
    Goal,
    /// Experience level selection (required)
    Experience,
    /// Age, weight and height (defaulted)
    BodyData,
    /// Equipment selection (required)
    Equipment,
    /// Muscle groups to avoid (optional)
    DislikedMuscles,
    /// Injured or sensitive areas (optional)
    SensitiveAreas,
    /// Days per week and session length (defaulted)
    Availability,
    /// Assisted or manual setup (required)
    SetupChoice,
}

impl OnboardingStep {
    /// Whether the profile satisfies this step
    ///
    /// Steps with a required single choice need that field set; defaulted
    /// and optional steps are always complete.
    #[must_use]
    pub const fn is_complete(&self, profile: &OnboardingProfile) -> bool {
        match self {
            Self::Gender => profile.gender.is_some(),
            Self::Goal => profile.goal.is_some(),
            Self::Experience => profile.experience_level.is_some(),
            Self::Equipment => profile.equipment_available.is_some(),
            Self::SetupChoice => profile.setup_choice.is_some(),
            Self::Welcome
            | Self::BodyData
            | Self::DislikedMuscles
            | Self::SensitiveAreas
            | Self::Availability => true,
        }
    }

    /// Whether advancing past this step needs a selection
    #[must_use]
    pub const fn is_required(&self) -> bool {
        matches!(
            self,
            Self::Gender | Self::Goal | Self::Experience | Self::Equipment | Self::SetupChoice
        )
    }

    /// Step heading
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Gender => "What is your gender?",
            Self::Goal => "What is your main goal?",
            Self::Experience => "How experienced are you?",
            Self::BodyData => "Tell us about your body",
            Self::Equipment => "What equipment do you have?",
            Self::DislikedMuscles => "Anything you would rather skip?",
            Self::SensitiveAreas => "Any sensitive areas?",
            Self::Availability => "How much time do you have?",
            Self::SetupChoice => "How should we build your plan?",
        }
    }

    /// Storage and CLI identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Gender => "gender",
            Self::Goal => "goal",
            Self::Experience => "experience",
            Self::BodyData => "body_data",
            Self::Equipment => "equipment",
            Self::DislikedMuscles => "disliked_muscles",
            Self::SensitiveAreas => "sensitive_areas",
            Self::Availability => "availability",
            Self::SetupChoice => "setup_choice",
        }
    }
}

/// Ordered wizard steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequence {
    steps: Vec<OnboardingStep>,
}

impl StepSequence {
    /// Create a sequence from an explicit order
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if fewer than two steps are given or a step repeats
    pub fn new(steps: Vec<OnboardingStep>) -> AppResult<Self> {
        if steps.len() < MIN_STEPS {
            return Err(AppError::invalid_input(format!(
                "a step sequence needs at least {MIN_STEPS} steps, got {}",
                steps.len()
            )));
        }
        let mut seen = HashSet::with_capacity(steps.len());
        if let Some(duplicate) = steps.iter().find(|step| !seen.insert(**step)) {
            return Err(AppError::invalid_input(format!(
                "step {} appears more than once",
                duplicate.as_str()
            )));
        }
        Ok(Self { steps })
    }

    /// The ten-step wizard
    #[must_use]
    pub fn standard() -> Self {
        Self {
            steps: vec![
                OnboardingStep::Welcome,
                OnboardingStep::Gender,
                OnboardingStep::Goal,
                OnboardingStep::Experience,
                OnboardingStep::BodyData,
                OnboardingStep::Equipment,
                OnboardingStep::DislikedMuscles,
                OnboardingStep::SensitiveAreas,
                OnboardingStep::Availability,
                OnboardingStep::SetupChoice,
            ],
        }
    }

    /// Number of steps (at least two)
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// Step at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<OnboardingStep> {
        self.steps.get(index).copied()
    }

    /// Position of `step`, if present
    #[must_use]
    pub fn position(&self, step: OnboardingStep) -> Option<usize> {
        self.steps.iter().position(|s| *s == step)
    }

    /// Steps in order
    #[must_use]
    pub fn steps(&self) -> &[OnboardingStep] {
        &self.steps
    }
}

impl Default for StepSequence {
    fn default() -> Self {
        Self::standard()
    }
}
