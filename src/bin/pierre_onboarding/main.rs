// ABOUTME: Pierre onboarding CLI - drives the wizard and diagnostic engine from the command line
// ABOUTME: Diagnoses JSON profiles, completes onboarding against the store and manages app state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Diagnose a profile file without touching the store
//! pierre-onboarding diagnose --profile profile.json
//!
//! # Diagnose the stored profile as JSON
//! pierre-onboarding diagnose --json
//!
//! # Run a profile through the wizard and persist it
//! pierre-onboarding complete --profile profile.json
//!
//! # Inspect or change the application state
//! pierre-onboarding state
//! pierre-onboarding set-state guest
//!
//! # Clear stored data
//! pierre-onboarding reset
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use pierre_core::models::AppState;
use pierre_onboarding::config::OnboardingConfig;
use pierre_onboarding::errors::{AppError, AppResult};
use pierre_onboarding::logging;
use pierre_onboarding::storage::StoreBackend;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "pierre-onboarding",
    about = "Pierre onboarding wizard and plan diagnostic CLI",
    long_about = "Runs onboarding profiles through the wizard, prints personalized plan diagnostics and manages the stored application state."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override for the file store
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print the plan diagnostic for a profile file or the stored profile
    Diagnose {
        /// JSON profile file (defaults to the stored profile)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Walk a profile through every wizard step and complete onboarding
    Complete {
        /// JSON profile file
        #[arg(long)]
        profile: PathBuf,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Show the stored application state
    State,

    /// Change the stored application state
    SetState {
        /// onboarding, awaiting_account, authenticated or guest
        #[arg(value_parser = parse_app_state)]
        state: AppState,
    },

    /// Remove the stored profile and return to onboarding
    Reset,
}

fn parse_app_state(value: &str) -> Result<AppState, String> {
    AppState::parse(value).ok_or_else(|| {
        format!("unknown state '{value}' (expected onboarding, awaiting_account, authenticated or guest)")
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.code.exit_code()).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    logging::init_from_env(cli.verbose)
        .map_err(|e| AppError::internal(format!("failed to initialize logging: {e}")))?;

    let mut config = OnboardingConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
        debug!("{}", config.summary());
    }

    let store = StoreBackend::open_store(&config)?;
    let engine = config.diagnostic_engine()?;

    match cli.command {
        Command::Diagnose { profile, json } => {
            commands::diagnose::run(&store, &engine, profile.as_deref(), json)
        }
        Command::Complete { profile, json } => {
            commands::complete::run(&store, engine, &profile, json)
        }
        Command::State => {
            commands::state::show(&store);
            Ok(())
        }
        Command::SetState { state } => commands::state::set(&store, state),
        Command::Reset => commands::state::reset(&store),
    }
}
