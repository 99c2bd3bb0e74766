// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for pierre-onboarding
// ABOUTME: Provides access to profile file loading and display formatting utilities

pub mod display;
pub mod profile_file;
