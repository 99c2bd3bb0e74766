// ABOUTME: Complete command for pierre-onboarding
// ABOUTME: Replays a profile file through every wizard step, then completes onboarding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_core::models::OnboardingProfile;
use pierre_intelligence::PlanDiagnosticEngine;
use pierre_onboarding::errors::{AppError, AppResult};
use pierre_onboarding::onboarding::{OnboardingFlow, StepSequence};
use pierre_onboarding::storage::PreferenceStore;
use std::path::Path;
use tracing::info;

use crate::helpers::{display, profile_file};

/// Complete onboarding with the profile in `path`
pub fn run<S: PreferenceStore>(
    store: &S,
    engine: PlanDiagnosticEngine,
    path: &Path,
    json: bool,
) -> AppResult<()> {
    let profile = profile_file::load(path)?;
    let mut flow = OnboardingFlow::with_engine(StepSequence::standard(), engine);
    apply_profile(&mut flow, &profile);

    while flow.advance() {}
    if !flow.is_last_step() || !flow.can_advance() {
        let step = flow.current();
        return Err(AppError::invalid_input(format!(
            "onboarding blocked at step '{}' ({}): a selection is required",
            step.as_str(),
            step.title()
        )));
    }

    let diagnostic = flow
        .complete_onboarding(store)?
        .ok_or_else(|| AppError::internal("onboarding did not complete on the last step"))?;
    info!(state = store.app_state().as_str(), "Profile stored");

    if json {
        display::print_json(&diagnostic)
    } else {
        display::print_diagnostic(&diagnostic);
        Ok(())
    }
}

/// Enter every field of `profile` through the wizard's setters
fn apply_profile(flow: &mut OnboardingFlow, profile: &OnboardingProfile) {
    if let Some(gender) = profile.gender {
        flow.set_gender(gender);
    }
    if let Some(goal) = profile.goal {
        flow.set_goal(goal);
    }
    if let Some(level) = profile.experience_level {
        flow.set_experience_level(level);
    }
    if let Some(equipment) = profile.equipment_available {
        flow.set_equipment(equipment);
    }
    if let Some(choice) = profile.setup_choice {
        flow.set_setup_choice(choice);
    }
    flow.set_age(profile.age);
    flow.set_weight_kg(profile.weight_kg);
    flow.set_height_cm(profile.height_cm);
    flow.set_available_days(profile.available_days);
    flow.set_session_duration(profile.session_duration);
    for group in &profile.disliked_muscle_groups {
        flow.toggle_disliked(*group);
    }
    for group in &profile.sensitive_areas {
        flow.toggle_sensitive(*group);
    }
}
