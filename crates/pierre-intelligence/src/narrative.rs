// ABOUTME: Narrative copy for the plan diagnostic: personalized greeting and results timeline
// ABOUTME: Greeting is an exhaustive goal by experience table; milestones anchor on time to results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_core::models::{ExperienceLevel, Goal, ResultsMilestone};

const BEGINNER_FOCUS: &str = "We built everything around someone who is just starting out";
const INTERMEDIATE_FOCUS: &str = "With your experience";
const ADVANCED_FOCUS: &str = "Your level calls for precision";

/// Two-paragraph greeting for the goal and experience level
#[must_use]
pub fn personalized_greeting(goal: Goal, level: ExperienceLevel) -> String {
    use ExperienceLevel::{Advanced, Beginner, Intermediate};
    use Goal::{Endurance, GeneralHealth, Hypertrophy, Strength, WeightLoss};

    let (opening, detail) = match (goal, level) {
        (Hypertrophy, Beginner) => (
            "Your goal is to build muscle, and you are in the right place to start.",
            format!("{BEGINNER_FOCUS}: safe progression, the right volume and a focus on what matters."),
        ),
        (Hypertrophy, Intermediate) => (
            "Your goal is to build muscle, and the path is clear.",
            format!("{INTERMEDIATE_FOCUS}, we tuned volume and intensity so you keep progressing."),
        ),
        (Hypertrophy, Advanced) => (
            "Your goal is to build muscle, and at this level every detail counts.",
            format!("{ADVANCED_FOCUS}. We adjusted every variable to get the most out of your training."),
        ),
        (WeightLoss, Beginner) => (
            "You want to lose weight in a healthy way, and this is the most important first step.",
            format!("{BEGINNER_FOCUS}: safe progression, the right volume and a focus on what matters."),
        ),
        (WeightLoss, Intermediate) => (
            "You want to lose weight in a healthy way. We put together the right plan for it.",
            format!("{INTERMEDIATE_FOCUS}, we tuned volume and intensity to maximize your calorie burn."),
        ),
        (WeightLoss, Advanced) => (
            "You want to lose weight and you already know the way. Let's optimize.",
            format!("{ADVANCED_FOCUS}. We adjusted every variable to get the most out of each session."),
        ),
        (Strength, Beginner) => (
            "Strength is your focus, and you will be surprised by how much you can gain early on.",
            format!("{BEGINNER_FOCUS}: progressive loads, technique and safety."),
        ),
        (Strength, Intermediate) => (
            "Strength is your focus. Every session will make you stronger.",
            format!("{INTERMEDIATE_FOCUS}, we tuned intensity and volume so you keep getting stronger."),
        ),
        (Strength, Advanced) => (
            "Strength is your focus, and at this level every detail makes a difference.",
            format!("{ADVANCED_FOCUS}. We adjusted periodization and intensity for maximum results."),
        ),
        (GeneralHealth, Beginner) => (
            "Taking care of your health is the best investment, and you have taken the first step.",
            format!("{BEGINNER_FOCUS}: accessible exercises, a comfortable pace and consistency."),
        ),
        (GeneralHealth, Intermediate) => (
            "Taking care of your health is the best investment, and you are already on your way.",
            format!("{INTERMEDIATE_FOCUS}, we built a balanced plan to keep you active and healthy."),
        ),
        (GeneralHealth, Advanced) => (
            "Taking care of your health is the best investment, and you already have the foundation.",
            "Your level allows a complete and varied plan. We optimized it to support your quality of life."
                .to_owned(),
        ),
        (Endurance, Beginner) => (
            "Endurance is built through consistency, and you are already here.",
            format!("{BEGINNER_FOCUS}: progressive volume and proper rest."),
        ),
        (Endurance, Intermediate) => (
            "Endurance is built through consistency, and you already have a solid base.",
            format!("{INTERMEDIATE_FOCUS}, we tuned volume and intensity to take your endurance to the next level."),
        ),
        (Endurance, Advanced) => (
            "Endurance is your strength. Let's refine it.",
            "Your level calls for precise periodization. We optimized every variable for peak performance."
                .to_owned(),
        ),
    };

    format!("{opening}\n\n{detail}")
}

/// Four-stage results timeline; the third stage is highlighted and uses the
/// time-to-results window
#[must_use]
pub fn results_milestones(time_to_results_weeks: &str) -> Vec<ResultsMilestone> {
    vec![
        milestone(
            "adaptation",
            "WEEK 1-2".to_owned(),
            "Adaptation",
            "Your nervous system gets more efficient and your form settles in.",
            false,
        ),
        milestone(
            "evolution",
            "WEEK 3-4".to_owned(),
            "Evolution",
            "First strength gains show up and your energy goes up.",
            false,
        ),
        milestone(
            "results",
            format!("WEEK {time_to_results_weeks}"),
            "Visible results",
            "Noticeable changes in body composition.",
            true,
        ),
        milestone(
            "consolidation",
            "WEEK 12+".to_owned(),
            "Consolidation",
            "Significant muscle growth and lasting habits.",
            false,
        ),
    ]
}

fn milestone(
    id: &str,
    week_label: String,
    title: &str,
    description: &str,
    is_highlight: bool,
) -> ResultsMilestone {
    ResultsMilestone {
        id: id.to_owned(),
        week_label,
        title: title.to_owned(),
        description: description.to_owned(),
        is_highlight,
    }
}
