// ABOUTME: Criterion benchmarks for the plan diagnostic engine and preference store
// ABOUTME: Measures diagnosis across the profile space and profile persistence round trips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for plan diagnosis.
//!
//! Measures single-profile diagnosis, a sweep over every goal, level and
//! schedule combination, and a save/load cycle through the in-memory store.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pierre_core::models::{
    EquipmentType, ExperienceLevel, Goal, MuscleGroup, OnboardingProfile, SessionDuration,
    SetupChoice,
};
use pierre_intelligence::PlanDiagnosticEngine;
use pierre_onboarding::storage::{InMemoryBackend, PreferenceStore, PreferencesManager};

const GOALS: [Goal; 5] = [
    Goal::Hypertrophy,
    Goal::WeightLoss,
    Goal::Strength,
    Goal::GeneralHealth,
    Goal::Endurance,
];

const LEVELS: [ExperienceLevel; 3] = [
    ExperienceLevel::Beginner,
    ExperienceLevel::Intermediate,
    ExperienceLevel::Advanced,
];

fn profile(
    goal: Goal,
    level: ExperienceLevel,
    days: u8,
    duration: SessionDuration,
) -> OnboardingProfile {
    let mut profile = OnboardingProfile {
        goal: Some(goal),
        experience_level: Some(level),
        equipment_available: Some(EquipmentType::FullGym),
        setup_choice: Some(SetupChoice::AssistedByEngine),
        session_duration: duration,
        ..OnboardingProfile::default()
    };
    profile.set_available_days(days);
    profile
}

/// Every goal × level × days × duration combination
fn profile_grid() -> Vec<OnboardingProfile> {
    let mut profiles = Vec::new();
    for goal in GOALS {
        for level in LEVELS {
            for days in 1..=7 {
                for duration in SessionDuration::ALL {
                    profiles.push(profile(goal, level, days, duration));
                }
            }
        }
    }
    profiles
}

fn bench_single_diagnosis(c: &mut Criterion) {
    let mut group = c.benchmark_group("diagnose");
    let engine = PlanDiagnosticEngine::new();

    let mut plain = profile(
        Goal::Hypertrophy,
        ExperienceLevel::Intermediate,
        4,
        SessionDuration::Sixty,
    );
    group.bench_function("no_exclusions", |b| {
        b.iter(|| engine.diagnose(black_box(&plain)));
    });

    plain.toggle_disliked(MuscleGroup::Legs);
    plain.toggle_sensitive(MuscleGroup::Back);
    plain.toggle_sensitive(MuscleGroup::Shoulders);
    plain.toggle_sensitive(MuscleGroup::Core);
    group.bench_function("with_exclusions", |b| {
        b.iter(|| engine.diagnose(black_box(&plain)));
    });

    let empty = OnboardingProfile::default();
    group.bench_function("empty_profile", |b| {
        b.iter(|| engine.diagnose(black_box(&empty)));
    });

    group.finish();
}

fn bench_profile_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("diagnose_sweep");
    let engine = PlanDiagnosticEngine::new();
    let profiles = profile_grid();

    group.throughput(Throughput::Elements(profiles.len() as u64));
    group.bench_with_input(
        BenchmarkId::new("full_grid", profiles.len()),
        &profiles,
        |b, profiles| {
            b.iter(|| {
                profiles
                    .iter()
                    .map(|p| engine.diagnose(black_box(p)).estimated_calories)
                    .sum::<i32>()
            });
        },
    );

    group.finish();
}

fn bench_store_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("preference_store");
    let store = PreferencesManager::new(InMemoryBackend::new());
    let stored = profile(
        Goal::Strength,
        ExperienceLevel::Advanced,
        5,
        SessionDuration::Ninety,
    );

    group.bench_function("save_then_load", |b| {
        b.iter(|| {
            let _ = store.save_profile(black_box(&stored));
            store.load_profile()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_diagnosis,
    bench_profile_sweep,
    bench_store_round_trip,
);
criterion_main!(benches);
