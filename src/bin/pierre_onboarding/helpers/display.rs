// ABOUTME: Output formatting helpers for pierre-onboarding
// ABOUTME: Provides consistent display functions for plan diagnostics and app state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_core::models::{AppState, OnboardingProfile, PlanDiagnostic};
use pierre_onboarding::errors::AppResult;

/// Print a diagnostic as pretty JSON
pub fn print_json(diagnostic: &PlanDiagnostic) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(diagnostic)?);
    Ok(())
}

/// Print a human-readable diagnostic summary
pub fn print_diagnostic(diagnostic: &PlanDiagnostic) {
    println!("\n{}", diagnostic.personalized_greeting);
    println!("\n{}", "=".repeat(60));
    println!("YOUR PLAN");
    println!("   Split: {} ({})", diagnostic.split_name, diagnostic.split_frequency_label);
    println!("   Weekly sets per muscle group: {}", diagnostic.volume_range);
    println!("   Reps per set: {}", diagnostic.rep_range);
    println!("   Target RPE: {}", diagnostic.rpe_range);
    println!("   Exercises per session: {}", diagnostic.exercises_per_session);
    println!("   Rest between sets: {}", diagnostic.rest_between_sets_label);
    println!("   Estimated kcal per session: ~{}", diagnostic.estimated_calories);
    println!(
        "   Weekly training time: {} min ({}: {})",
        diagnostic.weekly_training_minutes,
        diagnostic.commitment_level.display_name(),
        diagnostic.commitment_level.subtitle()
    );
    println!(
        "   BMI: {:.1} ({})",
        diagnostic.bmi,
        diagnostic.bmi_category.display_name()
    );

    println!("\nPRIORITY MUSCLE GROUPS");
    if diagnostic.priority_muscle_groups.is_empty() {
        println!("   (none)");
    } else {
        let names: Vec<&str> = diagnostic
            .priority_muscle_groups
            .iter()
            .map(|group| group.display_name())
            .collect();
        println!("   {}", names.join(", "));
    }

    if !diagnostic.recommendations.is_empty() {
        println!("\nRECOMMENDATIONS");
        for recommendation in &diagnostic.recommendations {
            println!("   - {recommendation}");
        }
    }

    println!("\nRESULTS TIMELINE (first results in {} weeks)", diagnostic.time_to_results_weeks);
    for milestone in &diagnostic.results_milestones {
        let marker = if milestone.is_highlight { "*" } else { " " };
        println!(
            " {marker} {:<10} {}: {}",
            milestone.week_label, milestone.title, milestone.description
        );
    }
    println!("{}", "=".repeat(60));
}

/// Print the application state and stored-profile status
pub fn print_app_state(state: AppState, profile: Option<&OnboardingProfile>) {
    for line in app_state_lines(state, profile) {
        println!("{line}");
    }
}

fn app_state_lines(state: AppState, profile: Option<&OnboardingProfile>) -> Vec<String> {
    let location = if state.has_entered_app() {
        "main app"
    } else {
        "onboarding"
    };
    let stored = match profile {
        None => "none",
        Some(p) if p.has_required_selections() => "complete",
        Some(_) => "partial",
    };
    vec![
        format!("App state: {} ({location})", state.as_str()),
        format!("Stored profile: {stored}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pierre_core::models::{EquipmentType, ExperienceLevel, Goal, SetupChoice};

    #[test]
    fn test_app_state_lines_without_profile() {
        let lines = app_state_lines(AppState::Onboarding, None);
        assert_eq!(lines[0], "App state: onboarding (onboarding)");
        assert_eq!(lines[1], "Stored profile: none");
    }

    #[test]
    fn test_app_state_lines_report_profile_completeness() {
        let mut profile = OnboardingProfile {
            goal: Some(Goal::Strength),
            experience_level: Some(ExperienceLevel::Intermediate),
            ..OnboardingProfile::default()
        };
        let lines = app_state_lines(AppState::AwaitingAccount, Some(&profile));
        assert_eq!(lines[0], "App state: awaiting_account (onboarding)");
        assert_eq!(lines[1], "Stored profile: partial");

        profile.equipment_available = Some(EquipmentType::FullGym);
        profile.setup_choice = Some(SetupChoice::Manual);
        let lines = app_state_lines(AppState::Guest, Some(&profile));
        assert_eq!(lines[0], "App state: guest (main app)");
        assert_eq!(lines[1], "Stored profile: complete");
    }
}
