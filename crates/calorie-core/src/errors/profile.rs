// ABOUTME: Profile validation error types for biometric input checking
// ABOUTME: Converted into AppError with the InvalidProfile code at the API boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Reasons a profile cannot be used for a calorie recommendation.
///
/// None of these are ever coerced to a default: a plausible-looking goal
/// computed from a corrupted profile is worse than no goal at all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// Gender outside the closed set {male, female, other}
    #[error("unrecognized gender '{0}' (expected male, female, or other)")]
    UnknownGender(String),

    /// Activity level outside the closed set of five categories
    #[error(
        "unrecognized activity level '{0}' (expected sedentary, light, moderate, active, or very-active)"
    )]
    UnknownActivityLevel(String),

    /// Measurement that must be a positive, finite number
    #[error("{field} must be a positive number, got {value}")]
    NonPositive {
        /// Name of the offending field
        field: &'static str,
        /// Value that was supplied
        value: f64,
    },

    /// Age that is not a positive whole number of years
    #[error("age must be a positive whole number of years, got {0}")]
    InvalidAge(f64),

    /// Inputs were individually valid but the formula produced no usable goal
    #[error("profile yields a non-positive daily calorie goal ({0:.1} kcal)")]
    NonPositiveGoal(f64),

    /// Inputs so large that the goal overflows the representable range
    #[error("profile yields a daily calorie goal out of range ({0} kcal)")]
    GoalOutOfRange(f64),
}

impl ProfileError {
    /// Create a non-positive measurement error
    #[must_use]
    pub const fn non_positive(field: &'static str, value: f64) -> Self {
        Self::NonPositive { field, value }
    }
}
