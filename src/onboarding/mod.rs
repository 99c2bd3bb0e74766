// ABOUTME: Onboarding wizard module: step definitions and the validation-gated state machine
// ABOUTME: Re-exports OnboardingFlow, OnboardingStep and StepSequence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Wizard state machine
pub mod state_machine;
/// Step definitions and ordering
pub mod steps;

pub use state_machine::OnboardingFlow;
pub use steps::{OnboardingStep, StepSequence};
