// ABOUTME: Main library entry point for the calorie goal engine
// ABOUTME: Daily calorie goal computation, profile staleness, storage, and progress summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Calorie Goal Engine
//!
//! Domain core of a personal calorie tracker. A biometric profile is turned
//! into a recommended daily calorie target, and a staleness policy decides
//! when the user should be asked to re-confirm their measurements.
//!
//! ## Architecture
//!
//! - **Intelligence**: the pure goal calculator and staleness policy
//! - **Storage**: the injected `ProfileRepository` capability and its stores
//! - **Services**: `ProfileService`, which wires storage, clock, and logging
//! - **Progress**: daily intake summary against the goal
//! - **Config** / **Logging**: environment-driven settings and `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust
//! use calorie_goal_engine::intelligence::compute_daily_calories;
//! use calorie_goal_engine::models::{ActivityLevel, Gender, Profile};
//! use chrono::Utc;
//!
//! # fn main() -> calorie_goal_engine::errors::AppResult<()> {
//! let profile = Profile::new(170.0, 70.0, 30, Gender::Male, ActivityLevel::Moderate, &Utc::now())?;
//! assert_eq!(compute_daily_calories(Some(&profile))?, 2507);
//! assert_eq!(compute_daily_calories(None)?, 2000);
//! # Ok(())
//! # }
//! ```

/// Environment configuration and formula tables
pub mod config;

/// Formula coefficients, profile defaults, and storage keys
pub mod constants;

/// Unified error handling
pub mod errors;

/// Goal calculator and staleness policy
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Profile and food entry models
pub mod models;

/// Daily intake summary against the goal
pub mod progress;

/// Profile orchestration over an injected repository
pub mod services;

/// Profile and daily goal persistence
pub mod storage;
