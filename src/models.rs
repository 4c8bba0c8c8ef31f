// ABOUTME: Re-export of the profile and food entry models from calorie-core
// ABOUTME: Profile, ProfileUpdate, Gender, ActivityLevel, FoodEntry, MealType
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use calorie_core::models::*;
