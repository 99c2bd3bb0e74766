// ABOUTME: Diagnose command for pierre-onboarding
// ABOUTME: Prints the plan diagnostic for a profile file or for the stored profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_intelligence::PlanDiagnosticEngine;
use pierre_onboarding::errors::AppResult;
use pierre_onboarding::storage::{load_diagnostic, PreferenceStore};
use std::path::Path;
use tracing::info;

use crate::helpers::{display, profile_file};

/// Diagnose `profile` if given, otherwise the stored profile
pub fn run<S: PreferenceStore>(
    store: &S,
    engine: &PlanDiagnosticEngine,
    profile: Option<&Path>,
    json: bool,
) -> AppResult<()> {
    let diagnostic = match profile {
        Some(path) => engine.diagnose(&profile_file::load(path)?),
        None => {
            info!("No profile file given, diagnosing the stored profile");
            load_diagnostic(store, engine)
        }
    };

    if json {
        display::print_json(&diagnostic)
    } else {
        display::print_diagnostic(&diagnostic);
        Ok(())
    }
}
