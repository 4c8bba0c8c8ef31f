// ABOUTME: Core types and constants for the calorie goal engine
// ABOUTME: Foundation crate with error handling, profile models, and formula constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Calorie Core
//!
//! Foundation crate providing the shared types used by the calorie goal
//! engine. It carries no I/O and no logging so that the calculator and the
//! staleness policy built on top of it stay pure.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ProfileError`
//! - **constants**: Mifflin-St Jeor coefficients, activity multipliers, profile defaults
//! - **models**: `Profile`, `ProfileUpdate`, `Gender`, `ActivityLevel`, `FoodEntry`

/// Unified error handling system with standard error codes
pub mod errors;

/// Formula coefficients, profile defaults, and storage keys
pub mod constants;

/// Core data models (profile, partial updates, food entries)
pub mod models;
