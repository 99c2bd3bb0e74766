// ABOUTME: Core data models for the Pierre onboarding wizard and plan diagnostic
// ABOUTME: Re-exports the domain vocabulary, OnboardingProfile, PlanDiagnostic and AppState
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! ## Design Principles
//!
//! - **Identity vs. copy**: enum variants carry identity; display text and
//!   icons come from separate lookup methods
//! - **Serializable**: every model round-trips through JSON for persistence
//! - **Closed sets**: vocabulary enums expose `ALL` in declaration order
//!
//! ## Core Models
//!
//! - `OnboardingProfile`: input record built by the wizard
//! - `PlanDiagnostic`: output record of the diagnostic engine
//! - `AppState`: persisted top-level application state

mod app_state;
mod diagnostic;
mod profile;
mod vocabulary;

pub use app_state::AppState;
pub use diagnostic::{BmiCategory, CommitmentLevel, PlanDiagnostic, ResultsMilestone, RpeRange};
pub use profile::OnboardingProfile;
pub use vocabulary::{
    EquipmentType, ExperienceLevel, Gender, Goal, MuscleGroup, SessionDuration, SetupChoice,
};
