// ABOUTME: Calendar-day staleness policy for the stored biometric profile
// ABOUTME: Decides whether the user should be prompted to re-confirm measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile Staleness Policy
//!
//! A profile is stale once its `last_updated` falls on an earlier calendar
//! day than `now`. Days are taken in the time zone of `now`, so passing a
//! `DateTime<Local>` gives the user's local midnight as the boundary.

use crate::models::Profile;
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Freshness of the stored profile relative to the current day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileFreshness {
    /// No profile has been set up
    Missing,
    /// Updated today, or dated in the future
    Fresh,
    /// Updated on an earlier day, or the update time is unknown
    Stale,
}

impl ProfileFreshness {
    /// Whether the user should be asked to set up or re-confirm the profile
    #[must_use]
    pub const fn needs_prompt(&self) -> bool {
        !matches!(self, Self::Fresh)
    }
}

/// Classify the stored profile against `now`
#[must_use]
pub fn profile_freshness<Tz: TimeZone>(
    profile: Option<&Profile>,
    now: &DateTime<Tz>,
) -> ProfileFreshness {
    let Some(profile) = profile else {
        return ProfileFreshness::Missing;
    };
    let Some(last_updated) = profile.last_updated else {
        return ProfileFreshness::Stale;
    };

    let updated_day = last_updated.with_timezone(&now.timezone()).date_naive();
    if updated_day < now.date_naive() {
        ProfileFreshness::Stale
    } else {
        ProfileFreshness::Fresh
    }
}

/// True when there is no profile or it was last updated before today
#[must_use]
pub fn should_prompt_update<Tz: TimeZone>(profile: Option<&Profile>, now: &DateTime<Tz>) -> bool {
    profile_freshness(profile, now).needs_prompt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Gender};
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_day_boundary_uses_zone_of_now() {
        // 23:30 UTC on the 9th is already the 10th in UTC+2
        let stamped = Utc.with_ymd_and_hms(2025, 3, 9, 23, 30, 0).unwrap();
        let profile =
            Profile::new(170.0, 70.0, 30, Gender::Male, ActivityLevel::Moderate, &stamped)
                .unwrap();

        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let now_local = plus_two.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap();
        assert!(!should_prompt_update(Some(&profile), &now_local));

        let now_utc = Utc.with_ymd_and_hms(2025, 3, 10, 6, 0, 0).unwrap();
        assert!(should_prompt_update(Some(&profile), &now_utc));
    }

    #[test]
    fn test_unknown_timestamp_is_stale() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 6, 0, 0).unwrap();
        let mut profile =
            Profile::new(170.0, 70.0, 30, Gender::Female, ActivityLevel::Light, &now).unwrap();
        profile.last_updated = None;

        assert_eq!(
            profile_freshness(Some(&profile), &now),
            ProfileFreshness::Stale
        );
    }
}
