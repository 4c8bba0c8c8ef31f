// ABOUTME: Nutrition formula configuration for the daily calorie goal
// ABOUTME: Mifflin-St Jeor coefficients, activity multipliers, and fallback goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Formula Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use crate::config::error::ConfigError;
use calorie_core::constants::nutrition as consts;
use calorie_core::models::{ActivityLevel, Gender};
use serde::{Deserialize, Serialize};

/// Complete formula configuration for the goal calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// BMR formula coefficients
    pub bmr: BmrCoefficients,
    /// TDEE activity multipliers
    pub activity_multipliers: ActivityMultipliers,
    /// Goal returned when there is no profile (kcal/day)
    pub fallback_daily_calories: u32,
}

impl NutritionConfig {
    /// The reference configuration used by the application
    pub const REFERENCE: Self = Self {
        bmr: BmrCoefficients::MIFFLIN_ST_JEOR,
        activity_multipliers: ActivityMultipliers::REFERENCE,
        fallback_daily_calories: consts::FALLBACK_DAILY_CALORIES,
    };

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a coefficient or multiplier table is unusable
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bmr.validate()?;
        self.activity_multipliers.validate()?;
        if self.fallback_daily_calories == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "fallback_daily_calories must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Mifflin-St Jeor coefficients
///
/// Formula: BMR = (weight x `weight_kg`) + (height x `height_cm`) + (age x `age`) + gender constant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmrCoefficients {
    /// Weight coefficient (10.0)
    pub weight: f64,
    /// Height coefficient (6.25)
    pub height: f64,
    /// Age coefficient (-5.0)
    pub age: f64,
    /// Male constant (+5)
    pub male_constant: f64,
    /// Female constant (-161), also used for `other`
    pub female_constant: f64,
}

impl BmrCoefficients {
    /// Mifflin-St Jeor (1990) reference coefficients
    pub const MIFFLIN_ST_JEOR: Self = Self {
        weight: consts::MSJ_WEIGHT_COEF,
        height: consts::MSJ_HEIGHT_COEF,
        age: consts::MSJ_AGE_COEF,
        male_constant: consts::MSJ_MALE_CONSTANT,
        female_constant: consts::MSJ_FEMALE_CONSTANT,
    };

    /// Gender-specific constant term
    #[must_use]
    pub const fn gender_constant(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.male_constant,
            // No dedicated coefficient set exists for `other`
            Gender::Female | Gender::Other => self.female_constant,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.weight <= 0.0 || self.height <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if self.age >= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR age coefficient must be negative",
            ));
        }
        Ok(())
    }
}

impl Default for BmrCoefficients {
    fn default() -> Self {
        Self::MIFFLIN_ST_JEOR
    }
}

/// Activity multipliers applied to BMR
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityMultipliers {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Light: 1.375
    pub light: f64,
    /// Moderate: 1.55
    pub moderate: f64,
    /// Active: 1.725
    pub active: f64,
    /// Very active: 1.9
    pub very_active: f64,
}

impl ActivityMultipliers {
    /// Reference multiplier table
    pub const REFERENCE: Self = Self {
        sedentary: consts::ACTIVITY_SEDENTARY,
        light: consts::ACTIVITY_LIGHT,
        moderate: consts::ACTIVITY_MODERATE,
        active: consts::ACTIVITY_ACTIVE,
        very_active: consts::ACTIVITY_VERY_ACTIVE,
    };

    /// Multiplier for an activity level
    #[must_use]
    pub const fn for_level(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }

    /// Validate that every multiplier is at least 1.0 and strictly increasing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the table is not usable for a monotonic goal
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sedentary < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "sedentary multiplier must be at least 1.0",
            ));
        }

        let ordered = ActivityLevel::ALL.map(|level| self.for_level(level));
        if ordered.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "activity multipliers must strictly increase from sedentary to very-active",
            ));
        }

        Ok(())
    }
}

impl Default for ActivityMultipliers {
    fn default() -> Self {
        Self::REFERENCE
    }
}
