// ABOUTME: Daily goal commands for calorie-cli
// ABOUTME: Shows the stored and recommended goal and applies manual overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use calorie_goal_engine::{errors::AppResult, services::ProfileService, storage::ProfileRepository};

use crate::helpers::display::display_breakdown;

type Result<T> = AppResult<T>;

/// Show the stored goal next to the one recommended by the profile
pub fn show<R: ProfileRepository>(service: &ProfileService<R>) -> Result<()> {
    let stored = service.daily_goal()?;
    println!("Daily goal: {stored} kcal");

    match service.recommended_breakdown()? {
        Some(breakdown) => {
            println!();
            display_breakdown(&breakdown);
            if breakdown.daily_calories != stored {
                println!("\nThe stored goal differs from the recommendation (manual override).");
            }
        }
        None => println!("No profile set up; using the default goal."),
    }
    Ok(())
}

/// Override the daily goal
pub fn set<R: ProfileRepository>(service: &ProfileService<R>, kcal: u32) -> Result<()> {
    service.set_daily_goal(kcal)?;
    println!("Daily goal set to {kcal} kcal");
    Ok(())
}
