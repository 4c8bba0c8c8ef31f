// ABOUTME: Profile commands for calorie-cli
// ABOUTME: Handles show, setup, and update of the biometric profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use calorie_goal_engine::{
    errors::AppResult,
    models::ProfileUpdate,
    services::ProfileService,
    storage::ProfileRepository,
};
use chrono::{DateTime, Local};
use tracing::info;

use crate::helpers::display::{display_breakdown, display_freshness, display_profile};

type Result<T> = AppResult<T>;

/// Show the stored profile and whether it is current
pub fn show<R: ProfileRepository>(service: &ProfileService<R>, now: &DateTime<Local>) -> Result<()> {
    match service.profile()? {
        Some(profile) => {
            display_profile(&profile);
            display_freshness(service.freshness(now)?);
        }
        None => {
            println!("No profile set up yet. Run `calorie-cli profile setup` to create one.");
        }
    }
    Ok(())
}

/// Create the profile; unspecified fields use the setup defaults
pub fn setup<R: ProfileRepository>(
    service: &ProfileService<R>,
    input: &ProfileUpdate,
    now: &DateTime<Local>,
) -> Result<()> {
    if service.profile()?.is_some() {
        info!("replacing existing profile");
    }

    let goal = service.setup_profile(input, now)?;
    if let Some(profile) = service.profile()? {
        display_profile(&profile);
    }
    println!("\nDaily goal set to {goal} kcal");
    Ok(())
}

/// Re-confirm measurements and recompute the daily goal from them
pub fn update<R: ProfileRepository>(
    service: &ProfileService<R>,
    update: &ProfileUpdate,
    now: &DateTime<Local>,
) -> Result<()> {
    if update.is_empty() {
        info!("no fields changed, re-confirming current measurements");
    }

    let breakdown = service.confirm_measurements(update, now)?;
    if let Some(profile) = service.profile()? {
        display_profile(&profile);
    }
    println!();
    display_breakdown(&breakdown);
    Ok(())
}
