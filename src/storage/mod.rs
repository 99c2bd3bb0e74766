// ABOUTME: Preference store persisting the onboarding profile and application-state flag
// ABOUTME: Defines PreferenceStore and a JSON-encoding PreferencesManager over pluggable key-value backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Preference Store
//!
//! Key-value persistence for the single onboarding profile and the
//! top-level [`AppState`]. The store is injected wherever it is needed;
//! there is no process-wide instance.
//!
//! Reads never fail: an absent record yields `None` (or the default state),
//! and a record that no longer decodes is logged, removed and treated as
//! absent.

/// Storage backend selection from configuration
pub mod factory;
/// File-per-key backend
pub mod file;
/// In-memory backend
pub mod memory;

pub use factory::StoreBackend;
pub use file::FileBackend;
pub use memory::InMemoryBackend;

use crate::errors::{AppResult, ErrorCode};
use pierre_core::models::{AppState, OnboardingProfile, PlanDiagnostic};
use pierre_intelligence::PlanDiagnosticEngine;
use tracing::{debug, warn};

/// Storage keys
pub mod keys {
    /// Serialized `OnboardingProfile`
    pub const ONBOARDING_PROFILE: &str = "onboarding_profile";
    /// `AppState` storage string
    pub const APP_STATE: &str = "app_state";
}

/// Raw string key-value storage
pub trait KeyValueBackend: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read. A record that exists
    /// but cannot be decoded as text is reported as `ErrorCode::SerializationError`.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove `key`; removing an absent key succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// Persistence operations used by the onboarding flow
pub trait PreferenceStore {
    /// Persist the profile
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the backend write fails
    fn save_profile(&self, profile: &OnboardingProfile) -> AppResult<()>;

    /// Load the persisted profile, if any
    fn load_profile(&self) -> Option<OnboardingProfile>;

    /// Persist the application state
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails
    fn set_app_state(&self, state: AppState) -> AppResult<()>;

    /// Current application state; `Onboarding` when absent or unreadable
    fn app_state(&self) -> AppState;

    /// Remove the profile and return to `AppState::Onboarding`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails
    fn clear_all(&self) -> AppResult<()>;
}

/// JSON-encoding preference store over a key-value backend
#[derive(Debug, Clone, Default)]
pub struct PreferencesManager<B: KeyValueBackend> {
    backend: B,
}

impl<B: KeyValueBackend> PreferencesManager<B> {
    /// Wrap a backend
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Underlying backend
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(e) if e.code == ErrorCode::SerializationError => {
                warn!(key, error = %e, "Stored preference is undecodable, discarding");
                self.discard_corrupt(key);
                None
            }
            Err(e) => {
                warn!(key, error = %e, "Failed to read preference");
                None
            }
        }
    }

    fn discard_corrupt(&self, key: &str) {
        if let Err(e) = self.backend.remove(key) {
            warn!(key, error = %e, "Failed to remove corrupt preference");
        }
    }
}

impl<B: KeyValueBackend> PreferenceStore for PreferencesManager<B> {
    fn save_profile(&self, profile: &OnboardingProfile) -> AppResult<()> {
        let encoded = serde_json::to_string(profile)?;
        self.backend.set(keys::ONBOARDING_PROFILE, &encoded)?;
        debug!("Onboarding profile saved");
        Ok(())
    }

    fn load_profile(&self) -> Option<OnboardingProfile> {
        let raw = self.read(keys::ONBOARDING_PROFILE)?;
        match serde_json::from_str::<OnboardingProfile>(&raw) {
            Ok(mut profile) => {
                profile.normalize();
                Some(profile)
            }
            Err(e) => {
                warn!(error = %e, "Stored onboarding profile is corrupt, discarding");
                self.discard_corrupt(keys::ONBOARDING_PROFILE);
                None
            }
        }
    }

    fn set_app_state(&self, state: AppState) -> AppResult<()> {
        self.backend.set(keys::APP_STATE, state.as_str())?;
        debug!(state = state.as_str(), "App state saved");
        Ok(())
    }

    fn app_state(&self) -> AppState {
        let Some(raw) = self.read(keys::APP_STATE) else {
            return AppState::default();
        };
        AppState::parse(&raw).unwrap_or_else(|| {
            warn!(value = %raw, "Stored app state is unrecognized, discarding");
            self.discard_corrupt(keys::APP_STATE);
            AppState::default()
        })
    }

    fn clear_all(&self) -> AppResult<()> {
        self.backend.remove(keys::ONBOARDING_PROFILE)?;
        self.set_app_state(AppState::Onboarding)
    }
}

/// Diagnose the stored profile, or an empty profile when none is stored
pub fn load_diagnostic<S: PreferenceStore + ?Sized>(
    store: &S,
    engine: &PlanDiagnosticEngine,
) -> PlanDiagnostic {
    let profile = store.load_profile().unwrap_or_default();
    engine.diagnose(&profile)
}
