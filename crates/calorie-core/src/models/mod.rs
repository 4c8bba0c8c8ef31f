// ABOUTME: Core data models for the calorie goal engine
// ABOUTME: Re-exports profile and food intake types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Food intake models
pub mod nutrition;

/// Biometric profile models
pub mod profile;

pub use nutrition::{FoodEntry, MealType};
pub use profile::{ActivityLevel, Gender, Profile, ProfileRecord, ProfileUpdate};
