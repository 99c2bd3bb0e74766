// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, store constructors and a fully answered onboarding flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `pierre_onboarding`

use pierre_core::models::{EquipmentType, ExperienceLevel, Gender, Goal, SetupChoice};
use pierre_onboarding::onboarding::OnboardingFlow;
use pierre_onboarding::storage::{FileBackend, InMemoryBackend, PreferencesManager};
use std::env;
use std::sync::Once;
use tempfile::TempDir;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN, // Default to WARN for quiet tests
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// In-memory preference store
pub fn memory_store() -> PreferencesManager<InMemoryBackend> {
    init_test_logging();
    PreferencesManager::new(InMemoryBackend::new())
}

/// File preference store in a fresh temporary directory
///
/// Keep the returned `TempDir` alive for the duration of the test.
pub fn file_store() -> (TempDir, PreferencesManager<FileBackend>) {
    init_test_logging();
    let dir = TempDir::new().expect("create temp dir");
    let backend = FileBackend::open(dir.path()).expect("open file backend");
    (dir, PreferencesManager::new(backend))
}

/// Standard wizard with every required selection made, still on step 0
pub fn answered_flow(goal: Goal, level: ExperienceLevel) -> OnboardingFlow {
    init_test_logging();
    let mut flow = OnboardingFlow::default();
    flow.set_gender(Gender::PreferNotToSay);
    flow.set_goal(goal);
    flow.set_experience_level(level);
    flow.set_equipment(EquipmentType::FullGym);
    flow.set_setup_choice(SetupChoice::AssistedByEngine);
    flow
}

/// Advance until the wizard stops moving; returns the number of steps taken
pub fn advance_to_end(flow: &mut OnboardingFlow) -> usize {
    let mut moves = 0;
    while flow.advance() {
        moves += 1;
    }
    moves
}
