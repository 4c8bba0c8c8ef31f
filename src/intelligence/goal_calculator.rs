// ABOUTME: Daily calorie goal calculation using the Mifflin-St Jeor equation
// ABOUTME: BMR, activity multiplier, and rounded daily target with a no-profile fallback
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Goal Calculator
//!
//! Converts a biometric profile into a recommended daily calorie target:
//! BMR from the Mifflin-St Jeor equation, scaled by an activity multiplier,
//! rounded to the nearest whole kilocalorie (half away from zero).
//!
//! Everything here is pure: no I/O, no clock, no logging.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::nutrition::NutritionConfig;
use crate::errors::{AppResult, ProfileError};
use crate::models::{ActivityLevel, Profile};
use serde::{Deserialize, Serialize};

/// How a daily goal was derived, for display alongside the number
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalBreakdown {
    /// Basal metabolic rate in kcal/day
    pub bmr: f64,
    /// Activity multiplier applied to the BMR
    pub multiplier: f64,
    /// Rounded daily target in kcal
    pub daily_calories: u32,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Formula:
/// - Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// - Women and other: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
///
/// # Errors
///
/// Returns an error if height, weight, or age is not positive
pub fn calculate_bmr(profile: &Profile) -> AppResult<f64> {
    calculate_bmr_with(profile, &NutritionConfig::REFERENCE)
}

/// Calculate BMR with explicit coefficients
///
/// # Errors
///
/// Returns an error if height, weight, or age is not positive
// Plain products summed left to right: a fused multiply-add changes the last
// bit and moves exact .5 goals to the wrong side of the rounding step.
#[allow(clippy::suboptimal_flops)]
pub fn calculate_bmr_with(profile: &Profile, config: &NutritionConfig) -> AppResult<f64> {
    profile.validate()?;

    let coefficients = &config.bmr;
    Ok(coefficients.weight * profile.weight_kg
        + coefficients.height * profile.height_cm
        + coefficients.age * f64::from(profile.age)
        + coefficients.gender_constant(profile.gender))
}

/// Activity multiplier for a level
#[must_use]
pub const fn activity_multiplier(level: ActivityLevel) -> f64 {
    NutritionConfig::REFERENCE.activity_multipliers.for_level(level)
}

/// Compute the breakdown of a profile's daily goal
///
/// # Errors
///
/// Returns `InvalidProfile` if an input is not positive or the rounded goal is not a positive `u32`
pub fn goal_breakdown(profile: &Profile) -> AppResult<GoalBreakdown> {
    goal_breakdown_with(profile, &NutritionConfig::REFERENCE)
}

/// Compute the breakdown with explicit formula tables
///
/// # Errors
///
/// Returns `InvalidProfile` if an input is not positive or the rounded goal is not a positive `u32`
pub fn goal_breakdown_with(profile: &Profile, config: &NutritionConfig) -> AppResult<GoalBreakdown> {
    let bmr = calculate_bmr_with(profile, config)?;
    let multiplier = config.activity_multipliers.for_level(profile.activity_level);
    let scaled = bmr * multiplier;

    // f64::round rounds half away from zero
    let rounded = scaled.round();
    if !rounded.is_finite() || rounded > f64::from(u32::MAX) {
        return Err(ProfileError::GoalOutOfRange(scaled).into());
    }
    if rounded < 1.0 {
        return Err(ProfileError::NonPositiveGoal(scaled).into());
    }

    Ok(GoalBreakdown {
        bmr,
        multiplier,
        daily_calories: rounded as u32,
    })
}

/// Recommended daily calorie target, or 2000 when there is no profile
///
/// # Errors
///
/// Returns `InvalidProfile` if the profile cannot produce a positive goal
pub fn compute_daily_calories(profile: Option<&Profile>) -> AppResult<u32> {
    compute_daily_calories_with(profile, &NutritionConfig::REFERENCE)
}

/// [`compute_daily_calories`] with explicit formula tables
///
/// # Errors
///
/// Returns `InvalidProfile` if the profile cannot produce a positive goal
pub fn compute_daily_calories_with(
    profile: Option<&Profile>,
    config: &NutritionConfig,
) -> AppResult<u32> {
    profile.map_or(Ok(config.fallback_daily_calories), |profile| {
        goal_breakdown_with(profile, config).map(|breakdown| breakdown.daily_calories)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;
    use chrono::{TimeZone, Utc};

    fn profile(gender: Gender, level: ActivityLevel) -> Profile {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
        Profile::new(170.0, 70.0, 30, gender, level, &now).unwrap()
    }

    #[test]
    fn test_bmr_male_fixture() {
        let bmr = calculate_bmr(&profile(Gender::Male, ActivityLevel::Moderate)).unwrap();
        assert!((bmr - 1617.5).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_female_fixture() {
        let bmr = calculate_bmr(&profile(Gender::Female, ActivityLevel::Moderate)).unwrap();
        assert!((bmr - 1451.5).abs() < 1e-9);
    }

    #[test]
    fn test_extreme_inputs_rejected_instead_of_clamped() {
        let mut tiny = profile(Gender::Female, ActivityLevel::Sedentary);
        tiny.height_cm = 1.0;
        tiny.weight_kg = 1.0;
        tiny.age = 120;

        let err = compute_daily_calories(Some(&tiny)).unwrap_err();
        assert!(matches!(
            err.profile_error(),
            Some(ProfileError::NonPositiveGoal(_))
        ));
    }

    #[test]
    fn test_overflowing_goal_is_out_of_range() {
        let mut huge = profile(Gender::Male, ActivityLevel::VeryActive);
        huge.height_cm = 1e308;

        let err = compute_daily_calories(Some(&huge)).unwrap_err();
        assert!(matches!(
            err.profile_error(),
            Some(ProfileError::GoalOutOfRange(value)) if value.is_infinite()
        ));
        assert!(!err.to_string().contains("non-positive"));

        huge.height_cm = 1e12;
        let err = compute_daily_calories(Some(&huge)).unwrap_err();
        assert!(matches!(
            err.profile_error(),
            Some(ProfileError::GoalOutOfRange(value)) if value.is_finite()
        ));
    }
}
