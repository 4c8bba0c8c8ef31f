// ABOUTME: Reference constants for the daily calorie goal formula
// ABOUTME: Mifflin-St Jeor coefficients, activity multipliers, and the no-profile fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition formula constants
//!
//! Reference: Mifflin, M.D., et al. (1990). A new predictive equation for
//! resting energy expenditure. *American Journal of Clinical Nutrition*,
//! 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241

/// Mifflin-St Jeor weight coefficient (kcal per kg)
pub const MSJ_WEIGHT_COEF: f64 = 10.0;
/// Mifflin-St Jeor height coefficient (kcal per cm)
pub const MSJ_HEIGHT_COEF: f64 = 6.25;
/// Mifflin-St Jeor age coefficient (kcal per year)
pub const MSJ_AGE_COEF: f64 = -5.0;
/// Mifflin-St Jeor male constant
pub const MSJ_MALE_CONSTANT: f64 = 5.0;
/// Mifflin-St Jeor female constant (also applied to `other`)
pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

/// Sedentary (little to no exercise)
pub const ACTIVITY_SEDENTARY: f64 = 1.2;
/// Light exercise 1-3 days/week
pub const ACTIVITY_LIGHT: f64 = 1.375;
/// Moderate exercise 3-5 days/week
pub const ACTIVITY_MODERATE: f64 = 1.55;
/// Hard exercise 6-7 days/week
pub const ACTIVITY_ACTIVE: f64 = 1.725;
/// Very hard exercise and a physical job
pub const ACTIVITY_VERY_ACTIVE: f64 = 1.9;

/// Daily goal returned when no profile exists yet (kcal/day)
pub const FALLBACK_DAILY_CALORIES: u32 = 2000;
