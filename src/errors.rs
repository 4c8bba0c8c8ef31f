// ABOUTME: Re-export of the unified error types from calorie-core
// ABOUTME: AppError, ErrorCode, ProfileError, and AppResult for the engine and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The error types live in `calorie-core` so that models can return them;
//! this module re-exports them under the crate's `errors` path.

pub use calorie_core::errors::*;
