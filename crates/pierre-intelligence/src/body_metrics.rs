// ABOUTME: Body composition and energy expenditure calculations for the plan diagnostic
// ABOUTME: BMI, session calorie estimate and weekly training minutes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::CalorieModel;
use crate::physiological_constants::energy::CALORIE_ROUNDING_STEP;
use pierre_core::models::RpeRange;

/// Body mass index from weight (kg) and height (cm)
///
/// Returns 0.0 for a zero height instead of dividing by zero.
#[must_use]
pub fn bmi(weight_kg: u16, height_cm: u16) -> f64 {
    if height_cm == 0 {
        return 0.0;
    }
    let height_m = f64::from(height_cm) / 100.0;
    f64::from(weight_kg) / (height_m * height_m)
}

/// Intensity multiplier for an RPE target
#[must_use]
pub fn intensity_factor(rpe: RpeRange, model: &CalorieModel) -> f64 {
    let midpoint = rpe.midpoint();
    if midpoint <= model.light_rpe_ceiling {
        model.light_factor
    } else if midpoint <= model.moderate_rpe_ceiling {
        model.moderate_factor
    } else {
        model.vigorous_factor
    }
}

/// Estimated kcal burned per session, rounded to the nearest 10
///
/// Halves round away from zero (`f64::round`).
#[must_use]
pub fn estimated_session_calories(
    weight_kg: u16,
    minutes: u32,
    rpe: RpeRange,
    model: &CalorieModel,
) -> i32 {
    let base = f64::from(weight_kg) * model.kcal_per_kg_minute * f64::from(minutes);
    let adjusted = base * intensity_factor(rpe, model);
    ((adjusted / CALORIE_ROUNDING_STEP).round() * CALORIE_ROUNDING_STEP) as i32
}

/// Total planned training minutes per week
#[must_use]
pub fn weekly_training_minutes(days: u8, session_minutes: u32) -> u32 {
    u32::from(days) * session_minutes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_known_values() {
        assert!((bmi(75, 178) - 23.67).abs() < 0.01);
        assert!((bmi(95, 170) - 32.87).abs() < 0.01);
    }

    #[test]
    fn test_bmi_zero_height_is_zero() {
        assert!(bmi(80, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_intensity_factor_breakpoints() {
        let model = CalorieModel::default();
        assert!((intensity_factor(RpeRange::new(5, 6), &model) - 0.85).abs() < f64::EPSILON);
        assert!((intensity_factor(RpeRange::new(6, 7), &model) - 1.0).abs() < f64::EPSILON);
        assert!((intensity_factor(RpeRange::new(7, 8), &model) - 1.0).abs() < f64::EPSILON);
        assert!((intensity_factor(RpeRange::new(8, 9), &model) - 1.15).abs() < f64::EPSILON);
    }

    #[test]
    fn test_calories_round_half_away_from_zero() {
        let model = CalorieModel::default();
        // 125 * 0.07 * 60 / 10 is exactly 52.5; half-to-even would give 520
        assert_eq!(
            estimated_session_calories(125, 60, RpeRange::new(6, 7), &model),
            530
        );
        // 75 * 0.07 * 60 / 10 lands just above 31.5 in f64
        assert_eq!(
            estimated_session_calories(75, 60, RpeRange::new(6, 7), &model),
            320
        );
    }

    #[test]
    fn test_calories_are_multiples_of_ten() {
        let model = CalorieModel::default();
        for weight in [30_u16, 55, 70, 95, 200] {
            for minutes in [30_u32, 45, 60, 90] {
                let kcal = estimated_session_calories(weight, minutes, RpeRange::new(7, 8), &model);
                assert_eq!(kcal % 10, 0);
                assert!(kcal > 0);
            }
        }
    }

    #[test]
    fn test_weekly_minutes() {
        assert_eq!(weekly_training_minutes(4, 60), 240);
        assert_eq!(weekly_training_minutes(7, 90), 630);
    }
}
