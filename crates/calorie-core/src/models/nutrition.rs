// ABOUTME: Food intake models consumed by the daily progress summary
// ABOUTME: FoodEntry and MealType definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// Every meal type in the order a day is usually logged
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];
}

/// A single logged food item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodEntry {
    /// Entry identifier
    pub id: String,
    /// Food name
    pub name: String,
    /// Calories in this entry
    pub calories: u32,
    /// When the food was eaten
    pub date: DateTime<Utc>,
    /// Meal this entry belongs to
    pub meal_type: MealType,
    /// Optional photo of the food
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
