// ABOUTME: App-state commands for pierre-onboarding
// ABOUTME: Shows, sets and resets the stored application state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_core::models::AppState;
use pierre_onboarding::errors::AppResult;
use pierre_onboarding::storage::PreferenceStore;
use tracing::info;

use crate::helpers::display;

/// Print the stored state
pub fn show<S: PreferenceStore>(store: &S) {
    let profile = store.load_profile();
    display::print_app_state(store.app_state(), profile.as_ref());
}

/// Store a new state
pub fn set<S: PreferenceStore>(store: &S, state: AppState) -> AppResult<()> {
    let previous = store.app_state();
    store.set_app_state(state)?;
    info!(
        from = previous.as_str(),
        to = state.as_str(),
        "App state changed"
    );
    println!("App state: {} -> {}", previous.as_str(), state.as_str());
    Ok(())
}

/// Remove the stored profile and return to onboarding
pub fn reset<S: PreferenceStore>(store: &S) -> AppResult<()> {
    store.clear_all()?;
    println!("Stored profile removed, app state: {}", store.app_state().as_str());
    Ok(())
}
