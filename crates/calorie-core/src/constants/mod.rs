// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Formula coefficients, profile defaults, and storage keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are pure data grouped by domain. The formula tables are fixed
//! reference values and are intentionally not environment-tunable.

/// Mifflin-St Jeor coefficients and activity multipliers
pub mod nutrition;

/// Values used when a profile is first created
pub mod profile_defaults {
    /// Default height in centimeters
    pub const HEIGHT_CM: f64 = 170.0;
    /// Default weight in kilograms
    pub const WEIGHT_KG: f64 = 70.0;
    /// Default age in years
    pub const AGE_YEARS: u32 = 30;
}

/// Keys under which the profile singleton and the daily goal are stored
pub mod storage_keys {
    /// Profile document key
    pub const USER_PROFILE: &str = "userProfile";
    /// Daily goal document key
    pub const DAILY_GOAL: &str = "dailyGoal";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name of the engine as reported in logs
    pub const CALORIE_GOAL_ENGINE: &str = "calorie-goal-engine";
}
