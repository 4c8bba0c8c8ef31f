// ABOUTME: Configuration management for the calorie goal engine
// ABOUTME: Environment-driven runtime settings and the fixed nutrition formula tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration
//!
//! Runtime settings come from the environment only. The formula tables in
//! [`nutrition`] are reference constants; they are modelled as typed config
//! structs so they can be validated and passed explicitly, not so they can
//! be overridden.

/// Environment-based runtime configuration (data directory, logging)
pub mod environment;

/// Configuration error types
pub mod error;

/// Mifflin-St Jeor coefficients and activity multiplier tables
pub mod nutrition;

pub use environment::{AppConfig, Environment};
pub use error::ConfigError;
pub use nutrition::{ActivityMultipliers, BmrCoefficients, NutritionConfig};
