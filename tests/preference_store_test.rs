// ABOUTME: Integration tests for the preference store over file and in-memory backends
// ABOUTME: Covers round trips, corrupt-record recovery, app-state fallback and clear_all
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{file_store, memory_store};
use pierre_core::models::{
    AppState, EquipmentType, ExperienceLevel, Goal, MuscleGroup, OnboardingProfile,
    SessionDuration, SetupChoice,
};
use pierre_intelligence::PlanDiagnosticEngine;
use pierre_onboarding::storage::{
    keys, load_diagnostic, FileBackend, KeyValueBackend, PreferenceStore, PreferencesManager,
};
use std::fs;

fn sample_profile() -> OnboardingProfile {
    let mut profile = OnboardingProfile {
        goal: Some(Goal::WeightLoss),
        experience_level: Some(ExperienceLevel::Beginner),
        equipment_available: Some(EquipmentType::HomeBasic),
        setup_choice: Some(SetupChoice::Manual),
        session_duration: SessionDuration::Thirty,
        ..OnboardingProfile::default()
    };
    profile.set_available_days(2);
    profile.set_weight_kg(95);
    profile.set_height_cm(170);
    profile.toggle_sensitive(MuscleGroup::Back);
    profile
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn test_file_store_round_trips_profile_and_state() {
    let (_dir, store) = file_store();
    assert!(store.load_profile().is_none());
    assert_eq!(store.app_state(), AppState::Onboarding);

    let profile = sample_profile();
    store.save_profile(&profile).unwrap();
    store.set_app_state(AppState::Guest).unwrap();

    assert_eq!(store.load_profile(), Some(profile));
    assert_eq!(store.app_state(), AppState::Guest);
}

#[test]
fn test_file_store_survives_reopen() {
    let (dir, store) = file_store();
    store.save_profile(&sample_profile()).unwrap();
    store.set_app_state(AppState::Authenticated).unwrap();
    drop(store);

    let reopened = PreferencesManager::new(FileBackend::open(dir.path()).unwrap());
    assert_eq!(reopened.load_profile(), Some(sample_profile()));
    assert_eq!(reopened.app_state(), AppState::Authenticated);
}

#[test]
fn test_memory_store_round_trips_profile() {
    let store = memory_store();
    let profile = sample_profile();
    store.save_profile(&profile).unwrap();
    assert_eq!(store.load_profile(), Some(profile));
}

// ============================================================================
// Corrupt records
// ============================================================================

#[test]
fn test_corrupt_profile_is_discarded() {
    let store = memory_store();
    store
        .backend()
        .set(keys::ONBOARDING_PROFILE, "{not json")
        .unwrap();

    assert!(store.load_profile().is_none());
    assert!(store
        .backend()
        .get(keys::ONBOARDING_PROFILE)
        .unwrap()
        .is_none());
}

#[test]
fn test_unknown_session_duration_is_corrupt() {
    let (dir, store) = file_store();
    fs::write(
        dir.path().join("onboarding_profile.pref"),
        r#"{"goal":"strength","session_duration":50}"#,
    )
    .unwrap();

    assert!(store.load_profile().is_none());
    assert!(!dir.path().join("onboarding_profile.pref").exists());
}

#[test]
fn test_non_utf8_profile_file_is_discarded() {
    let (dir, store) = file_store();
    let path = dir.path().join("onboarding_profile.pref");
    fs::write(&path, [0xff, 0xfe, 0x7b]).unwrap();

    assert!(store.load_profile().is_none());
    assert!(!path.exists());

    store.save_profile(&sample_profile()).unwrap();
    assert_eq!(store.load_profile(), Some(sample_profile()));
}

#[test]
fn test_non_utf8_app_state_file_is_discarded() {
    let (dir, store) = file_store();
    let path = dir.path().join("app_state.pref");
    fs::write(&path, [0xff, 0xfe]).unwrap();

    assert_eq!(store.app_state(), AppState::Onboarding);
    assert!(!path.exists());
}

#[test]
fn test_out_of_range_fields_are_clamped_on_load() {
    let store = memory_store();
    store
        .backend()
        .set(
            keys::ONBOARDING_PROFILE,
            r#"{"goal":"endurance","available_days":12,"weight_kg":500,"height_cm":20,"age":0}"#,
        )
        .unwrap();

    let profile = store.load_profile().unwrap();
    assert_eq!(profile.goal, Some(Goal::Endurance));
    assert_eq!(profile.available_days, 7);
    assert_eq!(profile.weight_kg, 200);
    assert_eq!(profile.height_cm, 130);
    assert_eq!(profile.age, 1);
}

#[test]
fn test_unrecognized_app_state_falls_back_to_onboarding() {
    let store = memory_store();
    store.backend().set(keys::APP_STATE, "premium").unwrap();

    assert_eq!(store.app_state(), AppState::Onboarding);
    assert!(store.backend().get(keys::APP_STATE).unwrap().is_none());
}

// ============================================================================
// clear_all and load_diagnostic
// ============================================================================

#[test]
fn test_clear_all_removes_profile_and_resets_state() {
    let (_dir, store) = file_store();
    store.save_profile(&sample_profile()).unwrap();
    store.set_app_state(AppState::AwaitingAccount).unwrap();

    store.clear_all().unwrap();
    assert!(store.load_profile().is_none());
    assert_eq!(store.app_state(), AppState::Onboarding);

    store.clear_all().unwrap();
    assert_eq!(store.app_state(), AppState::Onboarding);
}

#[test]
fn test_load_diagnostic_uses_stored_profile() {
    let store = memory_store();
    store.save_profile(&sample_profile()).unwrap();

    let diagnostic = load_diagnostic(&store, &PlanDiagnosticEngine::new());
    assert_eq!(diagnostic.rep_range, "12-15");
    assert_eq!(diagnostic.split_name, "Full Body");
    assert!(!diagnostic.priority_muscle_groups.contains(&MuscleGroup::Back));
}

#[test]
fn test_load_diagnostic_without_profile_uses_empty_profile() {
    let store = memory_store();
    let engine = PlanDiagnosticEngine::new();

    let diagnostic = load_diagnostic(&store, &engine);
    assert_eq!(diagnostic, engine.diagnose(&OnboardingProfile::default()));
}

#[test]
fn test_file_backend_rejects_path_like_keys() {
    let (_dir, store) = file_store();
    assert!(store.backend().get("../escape").is_err());
    assert!(store.backend().set("", "value").is_err());
}
