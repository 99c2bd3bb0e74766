// ABOUTME: Table-driven training prescription rules for the plan diagnostic
// ABOUTME: Split, weekly volume, rep range, RPE, exercises per session, rest and time to results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training prescription tables
//!
//! Every table is an exhaustive `match` over its key. There are no wildcard
//! arms over enum keys, so adding a goal or level fails to compile until
//! each table maps it.

use crate::physiological_constants::session_buckets;
use pierre_core::models::{ExperienceLevel, Goal, RpeRange};

/// Weekly split for the number of training days and experience level
///
/// Days 1-2 and 4 are level-independent.
#[must_use]
pub const fn split_name(days: u8, level: ExperienceLevel) -> &'static str {
    use ExperienceLevel::{Advanced, Beginner, Intermediate};
    match (days, level) {
        (0..=2, _) => "Full Body",
        (3, Beginner) => "Full Body",
        (3, Intermediate) => "Full Body / PPL",
        (3, Advanced) => "Push/Pull/Legs",
        (4, _) => "Upper/Lower",
        (5, Beginner) => "Upper/Lower + 1",
        (5, Intermediate | Advanced) => "PPL + Upper/Lower",
        (6..=u8::MAX, Beginner | Intermediate) => "PPL",
        (6..=u8::MAX, Advanced) => "PPL (2x)",
    }
}

/// Weekly frequency label, e.g. "4x per week"
#[must_use]
pub fn split_frequency_label(days: u8) -> String {
    format!("{days}x per week")
}

/// Sets per muscle group per week
#[must_use]
pub const fn volume_range(level: ExperienceLevel, goal: Goal) -> &'static str {
    use ExperienceLevel::{Advanced, Beginner, Intermediate};
    use Goal::{Endurance, GeneralHealth, Hypertrophy, Strength, WeightLoss};
    match (level, goal) {
        (Beginner, Hypertrophy) => "8-10",
        (Beginner, WeightLoss) => "6-8",
        (Beginner, Strength) => "6-8",
        (Beginner, GeneralHealth) => "6-8",
        (Beginner, Endurance) => "8-10",
        (Intermediate, Hypertrophy) => "14-16",
        (Intermediate, WeightLoss) => "10-12",
        (Intermediate, Strength) => "10-12",
        (Intermediate, GeneralHealth) => "10-12",
        (Intermediate, Endurance) => "12-14",
        (Advanced, Hypertrophy) => "18-22",
        (Advanced, WeightLoss) => "14-16",
        (Advanced, Strength) => "12-16",
        (Advanced, GeneralHealth) => "12-14",
        (Advanced, Endurance) => "16-18",
    }
}

/// Repetitions per set for the goal
#[must_use]
pub const fn rep_range(goal: Goal) -> &'static str {
    match goal {
        Goal::Hypertrophy => "8-12",
        Goal::WeightLoss => "12-15",
        Goal::Strength => "3-6",
        Goal::GeneralHealth => "10-15",
        Goal::Endurance => "15-20",
    }
}

/// Perceived exertion target
///
/// Increases with experience for every goal.
#[must_use]
pub const fn rpe_range(level: ExperienceLevel, goal: Goal) -> RpeRange {
    use ExperienceLevel::{Advanced, Beginner, Intermediate};
    use Goal::{Endurance, GeneralHealth, Hypertrophy, Strength, WeightLoss};
    match (level, goal) {
        (Beginner, Hypertrophy) => RpeRange::new(6, 7),
        (Beginner, WeightLoss) => RpeRange::new(5, 6),
        (Beginner, Strength) => RpeRange::new(6, 7),
        (Beginner, GeneralHealth) => RpeRange::new(5, 6),
        (Beginner, Endurance) => RpeRange::new(5, 6),
        (Intermediate, Hypertrophy) => RpeRange::new(7, 8),
        (Intermediate, WeightLoss) => RpeRange::new(6, 7),
        (Intermediate, Strength) => RpeRange::new(7, 8),
        (Intermediate, GeneralHealth) => RpeRange::new(6, 7),
        (Intermediate, Endurance) => RpeRange::new(6, 7),
        (Advanced, Hypertrophy) => RpeRange::new(8, 9),
        (Advanced, WeightLoss) => RpeRange::new(7, 8),
        (Advanced, Strength) => RpeRange::new(8, 9),
        (Advanced, GeneralHealth) => RpeRange::new(7, 8),
        (Advanced, Endurance) => RpeRange::new(7, 8),
    }
}

/// Session length bucket keyed by the inclusive upper bounds in
/// `session_buckets`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionBucket {
    /// Up to 30 minutes
    Short,
    /// Up to 45 minutes
    Standard,
    /// Up to 60 minutes
    Long,
    /// Longer than 60 minutes
    Extended,
}

impl SessionBucket {
    /// Bucket a session length
    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Self {
        if minutes <= session_buckets::SHORT_MAX_MINUTES {
            Self::Short
        } else if minutes <= session_buckets::STANDARD_MAX_MINUTES {
            Self::Standard
        } else if minutes <= session_buckets::LONG_MAX_MINUTES {
            Self::Long
        } else {
            Self::Extended
        }
    }
}

/// Exercises per session for the session length
#[must_use]
pub const fn exercises_per_session(minutes: u32) -> &'static str {
    match SessionBucket::from_minutes(minutes) {
        SessionBucket::Short => "4-5",
        SessionBucket::Standard => "5-6",
        SessionBucket::Long => "6-8",
        SessionBucket::Extended => "8-10",
    }
}

/// Rest between sets for the session length
///
/// Standard and long sessions share the same rest window.
#[must_use]
pub const fn rest_between_sets(minutes: u32) -> &'static str {
    match SessionBucket::from_minutes(minutes) {
        SessionBucket::Short => "60-90s",
        SessionBucket::Standard | SessionBucket::Long => "90-120s",
        SessionBucket::Extended => "120-180s",
    }
}

/// Weeks until first visible results
///
/// Shorter for advanced trainees than for beginners with the same goal.
#[must_use]
pub const fn time_to_results(goal: Goal, level: ExperienceLevel) -> &'static str {
    use ExperienceLevel::{Advanced, Beginner, Intermediate};
    use Goal::{Endurance, GeneralHealth, Hypertrophy, Strength, WeightLoss};
    match (goal, level) {
        (Hypertrophy, Beginner) => "8-12",
        (Hypertrophy, Intermediate) => "6-8",
        (Hypertrophy, Advanced) => "4-6",
        (WeightLoss, Beginner) => "4-6",
        (WeightLoss, Intermediate) => "3-5",
        (WeightLoss, Advanced) => "2-4",
        (Strength, Beginner) => "6-8",
        (Strength, Intermediate) => "4-6",
        (Strength, Advanced) => "3-5",
        (GeneralHealth, Beginner) => "3-4",
        (GeneralHealth, Intermediate) => "2-3",
        (GeneralHealth, Advanced) => "2-3",
        (Endurance, Beginner) => "4-6",
        (Endurance, Intermediate) => "3-5",
        (Endurance, Advanced) => "2-4",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parse a "low-high" label into its bounds
    fn bounds(label: &str) -> (u32, u32) {
        let trimmed = label.trim_end_matches('s');
        let (low, high) = trimmed.split_once('-').unwrap();
        (low.parse().unwrap(), high.parse().unwrap())
    }

    #[test]
    fn test_low_day_counts_are_full_body_for_every_level() {
        for level in ExperienceLevel::ALL {
            assert_eq!(split_name(1, level), "Full Body");
            assert_eq!(split_name(2, level), "Full Body");
            assert_eq!(split_name(4, level), "Upper/Lower");
        }
    }

    #[test]
    fn test_split_by_level_for_three_five_and_six_plus() {
        assert_eq!(split_name(3, ExperienceLevel::Intermediate), "Full Body / PPL");
        assert_eq!(split_name(3, ExperienceLevel::Advanced), "Push/Pull/Legs");
        assert_eq!(split_name(5, ExperienceLevel::Beginner), "Upper/Lower + 1");
        assert_eq!(split_name(5, ExperienceLevel::Advanced), "PPL + Upper/Lower");
        assert_eq!(split_name(6, ExperienceLevel::Intermediate), "PPL");
        assert_eq!(split_name(7, ExperienceLevel::Advanced), "PPL (2x)");
    }

    #[test]
    fn test_volume_grows_with_experience() {
        for goal in Goal::ALL {
            let beginner = bounds(volume_range(ExperienceLevel::Beginner, goal));
            let intermediate = bounds(volume_range(ExperienceLevel::Intermediate, goal));
            let advanced = bounds(volume_range(ExperienceLevel::Advanced, goal));
            assert!(beginner.0 < intermediate.0 && intermediate.0 <= advanced.0);
        }
    }

    #[test]
    fn test_hypertrophy_has_highest_volume_per_level() {
        for level in ExperienceLevel::ALL {
            let hypertrophy = bounds(volume_range(level, Goal::Hypertrophy));
            for goal in Goal::ALL {
                assert!(bounds(volume_range(level, goal)).1 <= hypertrophy.1);
            }
        }
    }

    #[test]
    fn test_rep_range_extremes() {
        assert_eq!(rep_range(Goal::Strength), "3-6");
        assert_eq!(rep_range(Goal::Endurance), "15-20");
    }

    #[test]
    fn test_rpe_is_monotonic_in_experience_and_within_scale() {
        for goal in Goal::ALL {
            let mut previous: Option<RpeRange> = None;
            for level in ExperienceLevel::ALL {
                let rpe = rpe_range(level, goal);
                assert!(rpe.low >= 5 && rpe.high <= 9 && rpe.low < rpe.high);
                if let Some(prev) = previous {
                    assert!(rpe.low > prev.low && rpe.high > prev.high);
                }
                previous = Some(rpe);
            }
        }
    }

    #[test]
    fn test_duration_buckets() {
        assert_eq!(exercises_per_session(30), "4-5");
        assert_eq!(exercises_per_session(45), "5-6");
        assert_eq!(exercises_per_session(60), "6-8");
        assert_eq!(exercises_per_session(90), "8-10");
        assert_eq!(rest_between_sets(30), "60-90s");
        assert_eq!(rest_between_sets(45), "90-120s");
        assert_eq!(rest_between_sets(60), "90-120s");
        assert_eq!(rest_between_sets(90), "120-180s");
    }

    #[test]
    fn test_advanced_results_never_slower_than_beginner() {
        for goal in Goal::ALL {
            let beginner = bounds(time_to_results(goal, ExperienceLevel::Beginner));
            let advanced = bounds(time_to_results(goal, ExperienceLevel::Advanced));
            assert!(advanced.1 < beginner.1);
        }
    }
}
