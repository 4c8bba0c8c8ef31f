// ABOUTME: Integration tests for the profile service over an in-memory repository
// ABOUTME: Setup, partial updates, confirm flow, staleness, and daily goal storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use calorie_goal_engine::{
    errors::{ErrorCode, ProfileError},
    intelligence::ProfileFreshness,
    models::{ActivityLevel, Gender, ProfileUpdate},
    storage::ProfileRepository,
};
use chrono::Utc;

mod common;

// ============================================================================
// SETUP
// ============================================================================

#[test]
fn test_setup_with_defaults_stores_profile_and_goal() {
    let service = common::memory_service();
    let now = common::utc(9, 0);

    let goal = service.setup_profile(&ProfileUpdate::default(), &now).unwrap();
    assert_eq!(goal, 2507);

    let profile = service.profile().unwrap().unwrap();
    assert!((profile.height_cm - 170.0).abs() < f64::EPSILON);
    assert!((profile.weight_kg - 70.0).abs() < f64::EPSILON);
    assert_eq!(profile.age, 30);
    assert_eq!(profile.gender, Gender::Male);
    assert_eq!(profile.activity_level, ActivityLevel::Moderate);
    assert_eq!(profile.last_updated, Some(now));

    assert_eq!(service.daily_goal().unwrap(), 2507);
}

#[test]
fn test_setup_rejects_invalid_input_without_storing() {
    let service = common::memory_service();
    let input = ProfileUpdate {
        height_cm: Some(-170.0),
        ..ProfileUpdate::default()
    };

    let err = service.setup_profile(&input, &common::utc(9, 0)).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidProfile);
    assert!(service.profile().unwrap().is_none());
    assert_eq!(service.repository().get_daily_goal().unwrap(), None);
}

// ============================================================================
// UPDATES
// ============================================================================

#[test]
fn test_partial_update_without_profile_starts_from_defaults() {
    let service = common::memory_service();
    let update = ProfileUpdate {
        gender: Some(Gender::Female),
        ..ProfileUpdate::default()
    };

    let profile = service.update_profile(&update, &common::utc(9, 0)).unwrap();
    assert_eq!(profile.gender, Gender::Female);
    assert_eq!(profile.age, 30);
    assert_eq!(profile.activity_level, ActivityLevel::Moderate);
}

#[test]
fn test_partial_update_keeps_other_fields_and_restamps() {
    let service = common::memory_service();
    let setup = ProfileUpdate {
        age: Some(41),
        activity_level: Some(ActivityLevel::Active),
        ..ProfileUpdate::default()
    };
    service.setup_profile(&setup, &common::local(0, 8, 9, 0)).unwrap();

    let later = common::local(0, 10, 7, 30);
    let update = ProfileUpdate {
        weight_kg: Some(68.5),
        ..ProfileUpdate::default()
    };
    let profile = service.update_profile(&update, &later).unwrap();

    assert!((profile.weight_kg - 68.5).abs() < f64::EPSILON);
    assert_eq!(profile.age, 41);
    assert_eq!(profile.activity_level, ActivityLevel::Active);
    assert_eq!(profile.last_updated, Some(later.with_timezone(&Utc)));
}

#[test]
fn test_rejected_update_leaves_stored_profile_untouched() {
    let service = common::memory_service();
    let before = common::local(0, 8, 9, 0);
    service.setup_profile(&ProfileUpdate::default(), &before).unwrap();

    let update = ProfileUpdate {
        age: Some(0),
        ..ProfileUpdate::default()
    };
    let err = service.update_profile(&update, &common::local(0, 10, 9, 0)).unwrap_err();

    assert!(matches!(err.profile_error(), Some(ProfileError::InvalidAge(_))));
    let stored = service.profile().unwrap().unwrap();
    assert_eq!(stored.age, 30);
    assert_eq!(stored.last_updated, Some(before.with_timezone(&Utc)));
}

// ============================================================================
// CONFIRM FLOW
// ============================================================================

#[test]
fn test_confirm_recomputes_goal_from_updated_profile() {
    let service = common::memory_service();
    service
        .setup_profile(&ProfileUpdate::default(), &common::local(0, 8, 9, 0))
        .unwrap();
    assert_eq!(service.daily_goal().unwrap(), 2507);

    let update = ProfileUpdate {
        gender: Some(Gender::Female),
        ..ProfileUpdate::default()
    };
    let breakdown = service
        .confirm_measurements(&update, &common::local(0, 10, 9, 0))
        .unwrap();

    assert_eq!(breakdown.daily_calories, 2250);
    assert_eq!(service.daily_goal().unwrap(), 2250);
}

#[test]
fn test_confirm_clears_the_prompt_for_the_rest_of_the_day() {
    let service = common::memory_service();
    service
        .setup_profile(&ProfileUpdate::default(), &common::local(0, 8, 9, 0))
        .unwrap();

    let morning = common::local(0, 10, 6, 0);
    assert!(service.needs_update(&morning).unwrap());

    service
        .confirm_measurements(&ProfileUpdate::default(), &morning)
        .unwrap();
    assert!(!service.needs_update(&morning).unwrap());
    assert!(!service.needs_update(&common::local(0, 10, 23, 59)).unwrap());
    assert!(service.needs_update(&common::local(0, 11, 0, 0)).unwrap());
}

// ============================================================================
// GOALS AND FRESHNESS
// ============================================================================

#[test]
fn test_freshness_states() {
    let service = common::memory_service();
    let now = common::local(0, 10, 12, 0);
    assert_eq!(service.freshness(&now).unwrap(), ProfileFreshness::Missing);

    service
        .setup_profile(&ProfileUpdate::default(), &common::local(0, 9, 12, 0))
        .unwrap();
    assert_eq!(service.freshness(&now).unwrap(), ProfileFreshness::Stale);

    service.update_profile(&ProfileUpdate::default(), &now).unwrap();
    assert_eq!(service.freshness(&now).unwrap(), ProfileFreshness::Fresh);
}

#[test]
fn test_daily_goal_defaults_and_manual_override() {
    let service = common::memory_service();
    assert_eq!(service.daily_goal().unwrap(), 2000);
    assert_eq!(service.recommended_goal().unwrap(), 2000);
    assert!(service.recommended_breakdown().unwrap().is_none());

    service.set_daily_goal(1850).unwrap();
    assert_eq!(service.daily_goal().unwrap(), 1850);

    let err = service.set_daily_goal(0).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(service.daily_goal().unwrap(), 1850);
}

#[test]
fn test_manual_goal_survives_until_next_confirm() {
    let service = common::memory_service();
    let now = common::local(0, 10, 9, 0);
    service.setup_profile(&ProfileUpdate::default(), &now).unwrap();

    service.set_daily_goal(2100).unwrap();
    assert_eq!(service.daily_goal().unwrap(), 2100);
    assert_eq!(service.recommended_goal().unwrap(), 2507);

    service
        .confirm_measurements(&ProfileUpdate::default(), &now)
        .unwrap();
    assert_eq!(service.daily_goal().unwrap(), 2507);
}
