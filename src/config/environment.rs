// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Resolves the data directory, deployment environment, and logging settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::config::error::ConfigError;
use crate::logging::LoggingConfig;
use calorie_core::constants::service_names;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Environment variable naming the data directory
pub const DATA_DIR_ENV: &str = "CALORIE_DATA_DIR";

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Top-level runtime configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Directory holding the profile and goal documents
    pub data_dir: PathBuf,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `CALORIE_DATA_DIR` is set but empty or not unicode
    pub fn from_env() -> Result<Self, ConfigError> {
        let logging = LoggingConfig::from_env();

        let data_dir = match env::var(DATA_DIR_ENV) {
            Ok(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyValue(DATA_DIR_ENV)),
            Ok(raw) => PathBuf::from(raw.trim()),
            Err(env::VarError::NotPresent) => default_data_dir(),
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            environment: logging.environment,
            data_dir,
            logging,
        })
    }

    /// Replace the data directory (e.g., from a command-line flag)
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }
}

/// Platform data directory for the engine, or `./data` when none exists
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from("./data"),
        |dir| dir.join(service_names::CALORIE_GOAL_ENGINE),
    )
}
