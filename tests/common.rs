// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, fixed clocks, and fixture profiles
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `calorie_goal_engine`

use calorie_goal_engine::models::{ActivityLevel, Gender, Profile};
use calorie_goal_engine::services::ProfileService;
use calorie_goal_engine::storage::InMemoryProfileStore;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        // Another test binary helper may already have installed a subscriber
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// A fixed UTC instant on 2025-03-10
pub fn utc(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, hour, minute, 0).unwrap()
}

/// A fixed instant on `day` of March 2025 in the given UTC offset (hours)
pub fn local(offset_hours: i32, day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(offset_hours * 3600)
        .unwrap()
        .with_ymd_and_hms(2025, 3, day, hour, minute, 0)
        .unwrap()
}

/// 170 cm, 70 kg, 30 years, moderate activity, stamped at `now`
pub fn fixture_profile<Tz: TimeZone>(gender: Gender, now: &DateTime<Tz>) -> Profile {
    Profile::new(170.0, 70.0, 30, gender, ActivityLevel::Moderate, now).unwrap()
}

/// Service over an empty in-memory store
pub fn memory_service() -> ProfileService<InMemoryProfileStore> {
    init_test_logging();
    ProfileService::new(InMemoryProfileStore::new())
}
