// ABOUTME: Unified error handling with stable error codes for the calorie goal engine
// ABOUTME: Defines AppError, ErrorCode, ErrorResponse, and re-exports domain errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the engine returns [`AppResult`]. Domain
//! errors such as [`ProfileError`] carry the precise reason and convert into
//! an [`AppError`] with a stable [`ErrorCode`], so callers can branch on the
//! code while still reaching the typed source through `std::error::Error`.

/// Profile validation errors
pub mod profile;

pub use profile::ProfileError;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Generic invalid input supplied by the caller
    InvalidInput = 3000,
    /// Profile violates a model invariant (unknown enum, non-positive value)
    InvalidProfile = 3100,

    // Configuration (6000-6999)
    /// Configuration value could not be used
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    InternalError = 9000,
    /// Reading or writing the backing store failed
    StorageError = 9002,
    /// Stored data could not be encoded or decoded
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidProfile => "The profile is invalid",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Process exit code used by command-line front ends
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput | Self::InvalidProfile => 65,
            Self::ConfigInvalid => 78,
            Self::StorageError => 74,
            Self::SerializationError | Self::InternalError => 70,
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Borrow the typed profile error behind an `InvalidProfile` code, if any
    #[must_use]
    pub fn profile_error(&self) -> Option<&ProfileError> {
        self.source
            .as_deref()
            .and_then(|source| source.downcast_ref::<ProfileError>())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<ProfileError> for AppError {
    fn from(error: ProfileError) -> Self {
        Self::new(ErrorCode::InvalidProfile, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error envelope for machine-readable output
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_error_maps_to_invalid_profile() {
        let error = AppError::from(ProfileError::UnknownGender("alien".to_owned()));

        assert_eq!(error.code, ErrorCode::InvalidProfile);
        assert!(matches!(
            error.profile_error(),
            Some(ProfileError::UnknownGender(value)) if value == "alien"
        ));
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::storage("disk full");
        let json = serde_json::to_string(&ErrorResponse::from(&error)).unwrap();

        assert!(json.contains("STORAGE_ERROR"));
        assert!(json.contains("disk full"));
    }

    #[test]
    fn test_display_includes_description() {
        let error = AppError::invalid_input("goal must be positive");
        assert_eq!(
            error.to_string(),
            "The provided input is invalid: goal must be positive"
        );
    }
}
