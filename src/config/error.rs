// ABOUTME: Configuration error types for environment and formula table validation
// ABOUTME: Defines error variants for invalid ranges, empty values, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Values that must be ordered are not (e.g., activity multipliers)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Environment variable is set but empty
    #[error("Empty value for {0}")]
    EmptyValue(&'static str),

    /// Environment variable access error (e.g., not valid unicode)
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
