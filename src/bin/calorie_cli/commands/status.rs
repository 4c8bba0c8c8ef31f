// ABOUTME: Status commands for calorie-cli
// ABOUTME: Profile staleness check with exit codes and progress against the daily goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use calorie_goal_engine::{
    errors::AppResult, intelligence::ProfileFreshness, progress::DailyProgress,
    services::ProfileService, storage::ProfileRepository,
};
use chrono::{DateTime, Local};
use std::process::ExitCode;

use crate::helpers::display::{display_freshness, display_progress};

type Result<T> = AppResult<T>;

/// Exit status when the profile should be set up or re-confirmed
const UPDATE_DUE: u8 = 2;

/// Report freshness; exits 0 when current and 2 when an update is due
pub fn check<R: ProfileRepository>(
    service: &ProfileService<R>,
    now: &DateTime<Local>,
) -> Result<ExitCode> {
    let freshness = service.freshness(now)?;
    display_freshness(freshness);

    Ok(if freshness == ProfileFreshness::Fresh {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(UPDATE_DUE)
    })
}

/// Show today's progress against the stored goal
pub fn progress<R: ProfileRepository>(service: &ProfileService<R>, consumed: u32) -> Result<()> {
    let goal = service.daily_goal()?;
    display_progress(&DailyProgress::from_consumed(consumed, goal));
    Ok(())
}
