// ABOUTME: Tests for the daily progress summary
// ABOUTME: Day filtering in the caller's zone, remaining floor, percentage cap, meal subtotals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use calorie_goal_engine::{
    models::{FoodEntry, MealType},
    progress::DailyProgress,
};
use chrono::{DateTime, Utc};

mod common;

fn entry(id: &str, calories: u32, date: DateTime<Utc>, meal_type: MealType) -> FoodEntry {
    FoodEntry {
        id: id.to_owned(),
        name: format!("food {id}"),
        calories,
        date,
        meal_type,
        image_url: None,
    }
}

#[test]
fn test_only_todays_entries_count() {
    let now = common::utc(20, 0);
    let yesterday = common::local(0, 9, 19, 0).with_timezone(&Utc);
    let entries = vec![
        entry("1", 450, common::utc(7, 30), MealType::Breakfast),
        entry("2", 650, common::utc(12, 15), MealType::Lunch),
        entry("3", 900, yesterday, MealType::Dinner),
    ];

    let progress = DailyProgress::for_day(&entries, 2000, &now);

    assert_eq!(progress.consumed, 1100);
    assert_eq!(progress.remaining, 900);
    assert_eq!(progress.percentage, 55);
    assert!(!progress.over_goal);
    assert_eq!(progress.by_meal.get(&MealType::Breakfast), Some(&450));
    assert_eq!(progress.by_meal.get(&MealType::Lunch), Some(&650));
    assert!(!progress.by_meal.contains_key(&MealType::Dinner));
}

#[test]
fn test_day_follows_zone_of_now() {
    // 2025-03-10 01:00 UTC is still the 9th in UTC-5
    let entries = vec![entry("1", 300, common::utc(1, 0), MealType::Snack)];

    let in_new_york = common::local(-5, 9, 22, 0);
    assert_eq!(DailyProgress::for_day(&entries, 2000, &in_new_york).consumed, 300);

    let in_utc = common::utc(22, 0);
    assert_eq!(DailyProgress::for_day(&entries, 2000, &in_utc).consumed, 300);

    let next_day_new_york = common::local(-5, 10, 22, 0);
    assert_eq!(
        DailyProgress::for_day(&entries, 2000, &next_day_new_york).consumed,
        0
    );
}

#[test]
fn test_over_goal_caps_percentage_and_floors_remaining() {
    let entries = vec![
        entry("1", 1500, common::utc(12, 0), MealType::Lunch),
        entry("2", 1200, common::utc(19, 0), MealType::Dinner),
        entry("3", 150, common::utc(21, 0), MealType::Snack),
        entry("4", 100, common::utc(22, 0), MealType::Snack),
    ];

    let progress = DailyProgress::for_day(&entries, 2000, &common::utc(23, 0));

    assert_eq!(progress.consumed, 2950);
    assert_eq!(progress.remaining, 0);
    assert_eq!(progress.percentage, 100);
    assert!(progress.over_goal);
    assert_eq!(progress.by_meal.get(&MealType::Snack), Some(&250));
}

#[test]
fn test_empty_day() {
    let progress = DailyProgress::for_day(&[], 2507, &common::utc(9, 0));

    assert_eq!(progress.consumed, 0);
    assert_eq!(progress.remaining, 2507);
    assert_eq!(progress.percentage, 0);
    assert!(progress.by_meal.is_empty());
}

#[test]
fn test_exactly_at_goal_is_not_over() {
    let progress = DailyProgress::from_consumed(2000, 2000);

    assert_eq!(progress.percentage, 100);
    assert_eq!(progress.remaining, 0);
    assert!(!progress.over_goal);
}
