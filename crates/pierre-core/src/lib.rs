// ABOUTME: Core types and constants for the Pierre onboarding platform
// ABOUTME: Foundation crate with error handling, domain vocabulary, profile and diagnostic models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Core
//!
//! Foundation crate providing shared types and constants for the Pierre
//! onboarding wizard and plan diagnostic engine. This crate is designed to
//! change infrequently, enabling incremental compilation benefits in the
//! workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Profile bounds and defaults organized by domain
//! - **models**: Domain vocabulary, `OnboardingProfile`, `PlanDiagnostic`, `AppState`

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (vocabulary enums, profile, diagnostic, app state)
pub mod models;
