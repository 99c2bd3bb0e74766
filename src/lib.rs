// ABOUTME: Main library entry point for the Pierre onboarding wizard and plan diagnostic
// ABOUTME: Wires the step state machine to the preference store and the diagnostic engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Onboarding
//!
//! A sequential, validation-gated onboarding wizard that collects a training
//! profile and hands it to the plan diagnostic engine.
//!
//! ## Architecture
//!
//! - **onboarding**: step sequence and the `OnboardingFlow` state machine
//! - **storage**: `PreferenceStore` with file and in-memory backends
//! - **config**: environment configuration
//! - **logging**: tracing subscriber setup
//! - **errors**: unified `AppError` shared with the workspace crates
//!
//! ## Example Usage
//!
//! ```rust
//! use pierre_core::models::{AppState, EquipmentType, ExperienceLevel, Gender, Goal, SetupChoice};
//! use pierre_onboarding::onboarding::OnboardingFlow;
//! use pierre_onboarding::storage::{InMemoryBackend, PreferenceStore, PreferencesManager};
//!
//! let store = PreferencesManager::new(InMemoryBackend::new());
//! let mut flow = OnboardingFlow::default();
//!
//! flow.set_gender(Gender::Female);
//! flow.set_goal(Goal::Hypertrophy);
//! flow.set_experience_level(ExperienceLevel::Intermediate);
//! flow.set_equipment(EquipmentType::FullGym);
//! flow.set_setup_choice(SetupChoice::AssistedByEngine);
//! while flow.advance() {}
//!
//! let diagnostic = flow.complete_onboarding(&store).unwrap().unwrap();
//! assert_eq!(diagnostic.rep_range, "8-12");
//! assert_eq!(store.app_state(), AppState::AwaitingAccount);
//! ```

/// Environment configuration
pub mod config;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Onboarding wizard state machine
pub mod onboarding;

/// Profile and app-state persistence
pub mod storage;
