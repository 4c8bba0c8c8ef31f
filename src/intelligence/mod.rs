// ABOUTME: Calorie intelligence module with the goal calculator and staleness policy
// ABOUTME: Pure functions over profiles with an explicit clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence
//!
//! The two decision engines of the tracker. Both are synchronous and free of
//! side effects; storage and logging belong to [`crate::services`].

/// Mifflin-St Jeor daily calorie goal
pub mod goal_calculator;

/// Calendar-day profile staleness
pub mod profile_staleness;

pub use goal_calculator::{
    activity_multiplier, calculate_bmr, calculate_bmr_with, compute_daily_calories,
    compute_daily_calories_with, goal_breakdown, goal_breakdown_with, GoalBreakdown,
};
pub use profile_staleness::{profile_freshness, should_prompt_update, ProfileFreshness};
