// ABOUTME: Onboarding wizard state machine with validation-gated forward navigation
// ABOUTME: Owns the profile and current step; completion hands the profile to the diagnostic engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::steps::{OnboardingStep, StepSequence};
use crate::errors::AppResult;
use crate::storage::PreferenceStore;
use pierre_core::models::{
    AppState, EquipmentType, ExperienceLevel, Gender, Goal, MuscleGroup, OnboardingProfile,
    PlanDiagnostic, SessionDuration, SetupChoice,
};
use pierre_intelligence::PlanDiagnosticEngine;
use tracing::{debug, info};

/// Onboarding wizard
///
/// Navigation never fails: advancing past an incomplete step, advancing
/// from the last step and retreating from the first step are no-ops.
/// Completion is the only operation with side effects.
///
/// # Examples
///
/// ```rust
/// use pierre_core::models::Goal;
/// use pierre_onboarding::onboarding::{OnboardingFlow, OnboardingStep, StepSequence};
///
/// let sequence = StepSequence::new(vec![OnboardingStep::Welcome, OnboardingStep::Goal]).unwrap();
/// let mut flow = OnboardingFlow::new(sequence);
///
/// assert!(flow.advance());
/// assert!(!flow.can_advance());
/// flow.set_goal(Goal::Strength);
/// assert!(flow.can_advance());
/// assert!(flow.is_last_step());
/// ```
#[derive(Debug, Clone)]
pub struct OnboardingFlow {
    sequence: StepSequence,
    current_step: usize,
    profile: OnboardingProfile,
    engine: PlanDiagnosticEngine,
    diagnostic: Option<PlanDiagnostic>,
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new(StepSequence::standard())
    }
}

impl OnboardingFlow {
    /// Start a wizard at the first step with an empty profile
    #[must_use]
    pub fn new(sequence: StepSequence) -> Self {
        Self::with_engine(sequence, PlanDiagnosticEngine::new())
    }

    /// Start a wizard that diagnoses with a custom engine
    #[must_use]
    pub fn with_engine(sequence: StepSequence, engine: PlanDiagnosticEngine) -> Self {
        Self {
            sequence,
            current_step: 0,
            profile: OnboardingProfile::default(),
            engine,
            diagnostic: None,
        }
    }

    /// Resume a wizard at the first step with an existing profile
    #[must_use]
    pub fn with_profile(mut self, profile: OnboardingProfile) -> Self {
        self.profile = profile;
        self.profile.normalize();
        self
    }

    // ================================================================================================
    // Navigation
    // ================================================================================================

    /// Index of the current step
    #[must_use]
    pub const fn current_step(&self) -> usize {
        self.current_step
    }

    /// Current step
    #[must_use]
    pub fn current(&self) -> OnboardingStep {
        self.sequence
            .get(self.current_step)
            .unwrap_or(OnboardingStep::Welcome)
    }

    /// Step order
    #[must_use]
    pub const fn sequence(&self) -> &StepSequence {
        &self.sequence
    }

    /// Number of steps
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.sequence.total_steps()
    }

    /// Whether the step at `index` is satisfied by the current profile
    ///
    /// Indices outside the sequence are never satisfied.
    #[must_use]
    pub fn can_advance_from_step(&self, index: usize) -> bool {
        self.sequence
            .get(index)
            .is_some_and(|step| step.is_complete(&self.profile))
    }

    /// Whether the current step is satisfied
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.can_advance_from_step(self.current_step)
    }

    /// Move forward one step if the current step is complete
    ///
    /// Returns whether the step changed.
    pub fn advance(&mut self) -> bool {
        if self.is_last_step() || !self.can_advance() {
            debug!(
                step = self.current().as_str(),
                "Advance ignored: last step or incomplete"
            );
            return false;
        }
        self.current_step += 1;
        debug!(
            step = self.current().as_str(),
            index = self.current_step,
            "Advanced"
        );
        true
    }

    /// Move back one step; never gated
    ///
    /// Returns whether the step changed.
    pub fn retreat(&mut self) -> bool {
        if self.is_first_step() {
            return false;
        }
        self.current_step -= 1;
        debug!(
            step = self.current().as_str(),
            index = self.current_step,
            "Retreated"
        );
        true
    }

    /// Position in the wizard from 0.0 (first step) to 1.0 (last step)
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        let last = self.total_steps().saturating_sub(1).max(1);
        self.current_step as f64 / last as f64
    }

    /// Whether the wizard is on its first step
    #[must_use]
    pub const fn is_first_step(&self) -> bool {
        self.current_step == 0
    }

    /// Whether the wizard is on its last step
    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.current_step + 1 >= self.total_steps()
    }

    // ================================================================================================
    // Completion
    // ================================================================================================

    /// Finish onboarding from the last step
    ///
    /// Returns `Ok(None)` without side effects unless the wizard is on its
    /// last step and that step is complete. Otherwise diagnoses the profile,
    /// persists it, moves the app state to `AwaitingAccount` and caches the
    /// diagnostic for the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails to persist the profile or state
    pub fn complete_onboarding<S: PreferenceStore + ?Sized>(
        &mut self,
        store: &S,
    ) -> AppResult<Option<PlanDiagnostic>> {
        if !self.is_last_step() || !self.can_advance() {
            debug!(
                step = self.current().as_str(),
                "Completion ignored: not on a complete last step"
            );
            return Ok(None);
        }

        let diagnostic = self.engine.diagnose(&self.profile);
        store.save_profile(&self.profile)?;
        store.set_app_state(AppState::AwaitingAccount)?;
        info!(
            split = %diagnostic.split_name,
            "Onboarding completed, awaiting account"
        );

        self.diagnostic = Some(diagnostic.clone());
        Ok(Some(diagnostic))
    }

    /// Diagnostic computed at completion, if any
    #[must_use]
    pub const fn diagnostic(&self) -> Option<&PlanDiagnostic> {
        self.diagnostic.as_ref()
    }

    /// Clear persisted data and restart with an empty profile
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails to clear
    pub fn reset<S: PreferenceStore + ?Sized>(&mut self, store: &S) -> AppResult<()> {
        store.clear_all()?;
        self.current_step = 0;
        self.profile = OnboardingProfile::default();
        self.diagnostic = None;
        info!("Onboarding reset");
        Ok(())
    }

    // ================================================================================================
    // Profile
    // ================================================================================================

    /// Profile collected so far
    #[must_use]
    pub const fn profile(&self) -> &OnboardingProfile {
        &self.profile
    }

    /// Select the training goal
    pub fn set_goal(&mut self, goal: Goal) {
        self.profile.goal = Some(goal);
    }

    /// Select the experience level
    pub fn set_experience_level(&mut self, level: ExperienceLevel) {
        self.profile.experience_level = Some(level);
    }

    /// Select the available equipment
    pub fn set_equipment(&mut self, equipment: EquipmentType) {
        self.profile.equipment_available = Some(equipment);
    }

    /// Select assisted or manual setup
    pub fn set_setup_choice(&mut self, choice: SetupChoice) {
        self.profile.setup_choice = Some(choice);
    }

    /// Select gender
    pub fn set_gender(&mut self, gender: Gender) {
        self.profile.gender = Some(gender);
    }

    /// Set training days per week, clamped to 1-7
    pub fn set_available_days(&mut self, days: u8) {
        self.profile.set_available_days(days);
    }

    /// Set session length
    pub fn set_session_duration(&mut self, duration: SessionDuration) {
        self.profile.session_duration = duration;
    }

    /// Set age, clamped to 1-100
    pub fn set_age(&mut self, age: u8) {
        self.profile.set_age(age);
    }

    /// Set weight, clamped to 30-200 kg
    pub fn set_weight_kg(&mut self, weight_kg: u16) {
        self.profile.set_weight_kg(weight_kg);
    }

    /// Set height, clamped to 130-220 cm
    pub fn set_height_cm(&mut self, height_cm: u16) {
        self.profile.set_height_cm(height_cm);
    }

    /// Add or remove a disliked muscle group
    pub fn toggle_disliked(&mut self, group: MuscleGroup) {
        self.profile.toggle_disliked(group);
    }

    /// Add or remove a sensitive area
    pub fn toggle_sensitive(&mut self, group: MuscleGroup) {
        self.profile.toggle_sensitive(group);
    }
}
