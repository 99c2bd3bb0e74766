// ABOUTME: Plan diagnostic result produced once per completed onboarding profile
// ABOUTME: Immutable record of split, volume, intensity, timing, recommendations and narrative
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::vocabulary::MuscleGroup;
use serde::{Deserialize, Serialize};

/// Personalized training-plan diagnostic
///
/// Produced by the diagnostic engine from a completed profile and consumed
/// read-only by presentation. All range fields are `"low-high"` labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDiagnostic {
    /// Weekly split name, e.g. "Upper/Lower"
    pub split_name: String,
    /// Weekly frequency label, e.g. "4x per week"
    pub split_frequency_label: String,
    /// Sets per muscle group per week
    pub volume_range: String,
    /// Repetitions per set
    pub rep_range: String,
    /// Perceived exertion target
    pub rpe_range: String,
    /// Exercises per session
    pub exercises_per_session: String,
    /// Rest between sets, e.g. "90-120s"
    pub rest_between_sets_label: String,
    /// Estimated calories per session, multiple of 10
    pub estimated_calories: i32,
    /// Weeks until first visible results
    pub time_to_results_weeks: String,
    /// Groups to emphasize, in muscle-group declaration order
    pub priority_muscle_groups: Vec<MuscleGroup>,
    /// Risk-aware tips in rule evaluation order
    pub recommendations: Vec<String>,
    /// Two-paragraph narrative greeting
    pub personalized_greeting: String,
    /// Icon identifier of the goal
    pub goal_icon: String,
    /// Body mass index
    pub bmi: f64,
    /// Body mass index classification
    pub bmi_category: BmiCategory,
    /// Weekly commitment classification from training days
    pub commitment_level: CommitmentLevel,
    /// Training days multiplied by session minutes
    pub weekly_training_minutes: u32,
    /// Path from first sessions to consolidated results
    pub results_milestones: Vec<ResultsMilestone>,
}

/// Integer RPE target range on the 1-10 exertion scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpeRange {
    /// Lower bound
    pub low: u8,
    /// Upper bound
    pub high: u8,
}

impl RpeRange {
    /// Create a range from its bounds
    #[must_use]
    pub const fn new(low: u8, high: u8) -> Self {
        Self { low, high }
    }

    /// Midpoint of the range
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (f64::from(self.low) + f64::from(self.high)) / 2.0
    }

    /// `"low-high"` label
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}-{}", self.low, self.high)
    }
}

/// BMI classification bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI 18.5 up to 25
    Healthy,
    /// BMI 25 up to 30
    Overweight,
    /// BMI 30 and above
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Healthy
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Label shown next to the BMI gauge
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Healthy => "Healthy",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

/// Weekly commitment classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitmentLevel {
    /// 1-2 days
    Light,
    /// 3-4 days
    Moderate,
    /// 5-6 days
    Intense,
    /// Every day
    Elite,
}

impl CommitmentLevel {
    /// Classify a number of training days per week
    #[must_use]
    pub const fn from_days(days: u8) -> Self {
        match days {
            0..=2 => Self::Light,
            3..=4 => Self::Moderate,
            5..=6 => Self::Intense,
            _ => Self::Elite,
        }
    }

    /// Headline label
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Moderate => "Moderate",
            Self::Intense => "Intense",
            Self::Elite => "Elite",
        }
    }

    /// Secondary line
    #[must_use]
    pub const fn subtitle(&self) -> &'static str {
        match self {
            Self::Light => "Easy to keep up",
            Self::Moderate => "Great balance",
            Self::Intense => "Serious dedication",
            Self::Elite => "Total commitment",
        }
    }
}

/// One stop on the results timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsMilestone {
    /// Stable identifier
    pub id: String,
    /// Week range label, e.g. "WEEK 1-2"
    pub week_label: String,
    /// Short title
    pub title: String,
    /// What happens in this phase
    pub description: String,
    /// Whether this is the highlighted "results" milestone
    pub is_highlight: bool,
}
