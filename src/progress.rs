// ABOUTME: Daily intake summary comparing consumed calories with the daily goal
// ABOUTME: Consumed, remaining, capped percentage, and per-meal subtotals for one calendar day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{FoodEntry, MealType};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Intake for one day measured against the daily goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyProgress {
    /// Calories eaten
    pub consumed: u32,
    /// Daily goal the day is measured against
    pub goal: u32,
    /// Calories left before reaching the goal, never negative
    pub remaining: u32,
    /// Share of the goal eaten, rounded and capped at 100
    pub percentage: u32,
    /// True once consumption exceeds the goal
    pub over_goal: bool,
    /// Calories per meal type; meals with no entries are omitted
    pub by_meal: BTreeMap<MealType, u32>,
}

impl DailyProgress {
    /// Summarise the entries that fall on the calendar day of `now`, in the zone of `now`
    #[must_use]
    pub fn for_day<Tz: TimeZone>(entries: &[FoodEntry], goal: u32, now: &DateTime<Tz>) -> Self {
        let today = now.date_naive();
        let zone = now.timezone();

        let mut by_meal = BTreeMap::new();
        for entry in entries
            .iter()
            .filter(|entry| entry.date.with_timezone(&zone).date_naive() == today)
        {
            let subtotal = by_meal.entry(entry.meal_type).or_insert(0_u32);
            *subtotal = subtotal.saturating_add(entry.calories);
        }

        let consumed = by_meal
            .values()
            .fold(0_u32, |total, calories| total.saturating_add(*calories));

        Self {
            by_meal,
            ..Self::from_consumed(consumed, goal)
        }
    }

    /// Summarise a known consumed total with no meal breakdown
    #[must_use]
    pub fn from_consumed(consumed: u32, goal: u32) -> Self {
        let percentage = if goal == 0 {
            if consumed == 0 { 0 } else { 100 }
        } else {
            let ratio = (f64::from(consumed) / f64::from(goal) * 100.0).round();
            ratio.min(100.0) as u32
        };

        Self {
            consumed,
            goal,
            remaining: goal.saturating_sub(consumed),
            percentage,
            over_goal: consumed > goal,
            by_meal: BTreeMap::new(),
        }
    }
}
