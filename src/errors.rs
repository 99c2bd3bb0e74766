// ABOUTME: Re-exports the unified error types from pierre-core for unified type identity
// ABOUTME: Ensures AppError/ErrorCode/AppResult are the same type across all workspace crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use pierre_core::errors::*;
