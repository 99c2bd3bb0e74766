// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for pierre-onboarding
// ABOUTME: Provides access to diagnose, complete and app-state commands

pub mod complete;
pub mod diagnose;
pub mod state;
