// ABOUTME: Profile domain service orchestrating setup, updates, staleness, and goal storage
// ABOUTME: Wires the goal calculator and staleness policy to an injected ProfileRepository
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::nutrition::NutritionConfig;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{
    compute_daily_calories_with, goal_breakdown_with, profile_freshness, GoalBreakdown,
    ProfileFreshness,
};
use crate::models::{Profile, ProfileUpdate};
use crate::storage::ProfileRepository;
use chrono::{DateTime, TimeZone};
use tracing::{debug, info, warn};

/// Profile lifecycle over a [`ProfileRepository`].
///
/// The clock is always passed in; the service never reads it.
#[derive(Debug)]
pub struct ProfileService<R> {
    repository: R,
    config: NutritionConfig,
}

impl<R: ProfileRepository> ProfileService<R> {
    /// Create a service using the reference formula tables
    #[must_use]
    pub const fn new(repository: R) -> Self {
        Self::with_config(repository, NutritionConfig::REFERENCE)
    }

    /// Create a service with explicit formula tables
    #[must_use]
    pub const fn with_config(repository: R, config: NutritionConfig) -> Self {
        Self { repository, config }
    }

    /// Borrow the underlying repository
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Current profile, if one has been set up
    ///
    /// # Errors
    ///
    /// Returns an error if the stored profile cannot be read or is invalid
    pub fn profile(&self) -> AppResult<Option<Profile>> {
        self.repository.get_profile()
    }

    /// Create the profile from the setup defaults overlaid with `input`, store
    /// it, then compute and store the daily goal
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` if the resulting profile is invalid, or a storage error
    pub fn setup_profile<Tz: TimeZone>(
        &self,
        input: &ProfileUpdate,
        now: &DateTime<Tz>,
    ) -> AppResult<u32> {
        let profile = Profile::default_at(now).apply(input, now)?;
        let breakdown = goal_breakdown_with(&profile, &self.config)?;

        self.repository.put_profile(&profile)?;
        self.repository.put_daily_goal(breakdown.daily_calories)?;

        info!(
            gender = %profile.gender,
            activity_level = %profile.activity_level,
            daily_calories = breakdown.daily_calories,
            "profile set up"
        );
        Ok(breakdown.daily_calories)
    }

    /// Merge `update` into the stored profile (or the setup defaults when none
    /// exists), stamp it with `now`, and store it
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` if the merged profile is invalid, or a storage error
    pub fn update_profile<Tz: TimeZone>(
        &self,
        update: &ProfileUpdate,
        now: &DateTime<Tz>,
    ) -> AppResult<Profile> {
        let current = match self.repository.get_profile()? {
            Some(profile) => profile,
            None => {
                debug!("no stored profile, applying update over setup defaults");
                Profile::default_at(now)
            }
        };

        let updated = current.apply(update, now).map_err(|e| {
            warn!(error = %e, "rejected profile update");
            AppError::from(e)
        })?;
        self.repository.put_profile(&updated)?;

        info!(
            fields_changed = !update.is_empty(),
            last_updated = ?updated.last_updated,
            "profile updated"
        );
        Ok(updated)
    }

    /// Submit re-confirmed measurements: update the profile, then recompute
    /// and store the goal from the updated values
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` if the merged profile is invalid, or a storage error
    pub fn confirm_measurements<Tz: TimeZone>(
        &self,
        update: &ProfileUpdate,
        now: &DateTime<Tz>,
    ) -> AppResult<GoalBreakdown> {
        let updated = self.update_profile(update, now)?;
        let breakdown = goal_breakdown_with(&updated, &self.config)?;
        self.repository.put_daily_goal(breakdown.daily_calories)?;

        info!(
            bmr = breakdown.bmr,
            multiplier = breakdown.multiplier,
            daily_calories = breakdown.daily_calories,
            "measurements confirmed, daily goal recomputed"
        );
        Ok(breakdown)
    }

    /// Freshness of the stored profile on the day of `now`
    ///
    /// # Errors
    ///
    /// Returns an error if the stored profile cannot be read or is invalid
    pub fn freshness<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> AppResult<ProfileFreshness> {
        let profile = self.repository.get_profile()?;
        let freshness = profile_freshness(profile.as_ref(), now);
        debug!(?freshness, "profile freshness evaluated");
        Ok(freshness)
    }

    /// Whether the user should be prompted to set up or re-confirm the profile
    ///
    /// # Errors
    ///
    /// Returns an error if the stored profile cannot be read or is invalid
    pub fn needs_update<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> AppResult<bool> {
        self.freshness(now).map(|freshness| freshness.needs_prompt())
    }

    /// Goal computed from the stored profile, or the fallback when none exists
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` if the stored profile cannot produce a goal
    pub fn recommended_goal(&self) -> AppResult<u32> {
        let profile = self.repository.get_profile()?;
        compute_daily_calories_with(profile.as_ref(), &self.config)
    }

    /// Breakdown of the goal for the stored profile, if one exists
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` if the stored profile cannot produce a goal
    pub fn recommended_breakdown(&self) -> AppResult<Option<GoalBreakdown>> {
        self.repository
            .get_profile()?
            .map(|profile| goal_breakdown_with(&profile, &self.config))
            .transpose()
    }

    /// Stored daily goal, or the fallback when none has been saved
    ///
    /// # Errors
    ///
    /// Returns an error if the stored goal cannot be read
    pub fn daily_goal(&self) -> AppResult<u32> {
        Ok(self
            .repository
            .get_daily_goal()?
            .unwrap_or(self.config.fallback_daily_calories))
    }

    /// Manually override the stored daily goal
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `goal` is zero, or a storage error
    pub fn set_daily_goal(&self, goal: u32) -> AppResult<()> {
        if goal == 0 {
            return Err(AppError::invalid_input("daily goal must be a positive number"));
        }
        self.repository.put_daily_goal(goal)?;
        info!(daily_calories = goal, "daily goal set manually");
        Ok(())
    }
}
