// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for calorie-cli
// ABOUTME: Provides consistent display functions for profiles, goals, and progress

use calorie_goal_engine::{
    errors::{AppError, ErrorResponse},
    intelligence::{GoalBreakdown, ProfileFreshness},
    logging::LogFormat,
    models::Profile,
    progress::DailyProgress,
};

const BAR_WIDTH: usize = 40;

/// Display the stored profile
pub fn display_profile(profile: &Profile) {
    println!("Profile");
    println!("{}", "=".repeat(40));
    println!("   Height:         {:.1} cm", profile.height_cm);
    println!("   Weight:         {:.1} kg", profile.weight_kg);
    println!("   Age:            {} years", profile.age);
    println!("   Gender:         {}", profile.gender);
    println!(
        "   Activity level: {} ({})",
        profile.activity_level,
        profile.activity_level.description()
    );
    match profile.last_updated {
        Some(ts) => println!("   Last updated:   {}", ts.format("%Y-%m-%d %H:%M UTC")),
        None => println!("   Last updated:   unknown"),
    }
}

/// Display how the daily goal was derived
pub fn display_breakdown(breakdown: &GoalBreakdown) {
    println!("Recommended goal");
    println!("{}", "=".repeat(40));
    println!("   BMR (Mifflin-St Jeor): {:.1} kcal", breakdown.bmr);
    println!("   Activity multiplier:   x{}", breakdown.multiplier);
    println!("   Daily goal:            {} kcal", breakdown.daily_calories);
}

/// Display the profile freshness verdict
pub fn display_freshness(freshness: ProfileFreshness) {
    match freshness {
        ProfileFreshness::Fresh => println!("Profile is up to date."),
        ProfileFreshness::Stale => println!(
            "Your measurements were last confirmed before today. Run `calorie-cli profile update` to re-confirm them."
        ),
        ProfileFreshness::Missing => {
            println!("No profile set up yet. Run `calorie-cli profile setup` to create one.");
        }
    }
}

/// Display progress with a text bar
pub fn display_progress(progress: &DailyProgress) {
    let filled = BAR_WIDTH * progress.percentage as usize / 100;

    println!("Daily progress");
    println!("{}", "=".repeat(40));
    println!(
        "[{}{}] {}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        progress.percentage
    );
    println!("   Consumed:  {} kcal", progress.consumed);
    println!("   Goal:      {} kcal", progress.goal);
    println!("   Remaining: {} kcal", progress.remaining);
    if progress.over_goal {
        println!("\nYou are over your daily goal.");
    }
}

/// Render a failed command for stderr
///
/// With JSON logging the error is an `ErrorResponse` envelope on one line so
/// that log collectors can parse it; otherwise it is the plain error chain.
pub fn format_error(error: &anyhow::Error, format: LogFormat) -> String {
    if format != LogFormat::Json {
        return format!("Error: {error:#}");
    }

    let response = error.downcast_ref::<AppError>().map_or_else(
        || ErrorResponse::from(&AppError::internal(format!("{error:#}"))),
        ErrorResponse::from,
    );
    serde_json::to_string(&response).unwrap_or_else(|_| format!("Error: {error:#}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use calorie_goal_engine::errors::ErrorCode;

    #[test]
    fn test_json_format_emits_error_envelope() {
        let error = anyhow::Error::from(AppError::invalid_input("goal must be positive"));
        let line = format_error(&error, LogFormat::Json);

        let response: ErrorResponse = serde_json::from_str(&line).unwrap();
        assert_eq!(response.error.code, ErrorCode::InvalidInput);
        assert_eq!(response.error.message, "goal must be positive");
    }

    #[test]
    fn test_foreign_errors_become_internal_envelopes() {
        let error = anyhow::anyhow!("subscriber already set");
        let line = format_error(&error, LogFormat::Json);

        let response: ErrorResponse = serde_json::from_str(&line).unwrap();
        assert_eq!(response.error.code, ErrorCode::InternalError);
        assert!(response.error.message.contains("subscriber already set"));
    }

    #[test]
    fn test_text_formats_print_the_chain() {
        let error = anyhow::Error::from(AppError::storage("disk full"));
        let line = format_error(&error, LogFormat::Pretty);

        assert!(line.starts_with("Error: "));
        assert!(line.contains("disk full"));
    }
}
