// ABOUTME: Application-state flag persisted next to the onboarding profile
// ABOUTME: Decides which top-level surface (wizard, diagnostic, main app) is shown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Top-level application state persisted by the preference store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AppState {
    /// Onboarding wizard in progress (initial state)
    #[default]
    Onboarding,
    /// Wizard finished, diagnostic shown, waiting for account creation
    AwaitingAccount,
    /// Signed in with an account
    Authenticated,
    /// Continuing without an account
    Guest,
}

impl AppState {
    /// Storage string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Onboarding => "onboarding",
            Self::AwaitingAccount => "awaiting_account",
            Self::Authenticated => "authenticated",
            Self::Guest => "guest",
        }
    }

    /// Parse from storage string representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "onboarding" => Some(Self::Onboarding),
            "awaiting_account" | "awaitingaccount" => Some(Self::AwaitingAccount),
            "authenticated" => Some(Self::Authenticated),
            "guest" => Some(Self::Guest),
            _ => None,
        }
    }

    /// Whether the user has left the onboarding flow for the main app
    #[must_use]
    pub const fn has_entered_app(&self) -> bool {
        matches!(self, Self::Authenticated | Self::Guest)
    }
}
