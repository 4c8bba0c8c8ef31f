// ABOUTME: Biometric profile model used for calorie goal and staleness decisions
// ABOUTME: Profile, ProfileUpdate, Gender, ActivityLevel with construction-time validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::profile_defaults;
use crate::errors::ProfileError;
use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender used to select the Mifflin-St Jeor constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    /// Male constant (+5)
    Male,
    /// Female constant (-161)
    Female,
    /// Uses the female constant
    Other,
}

impl Gender {
    /// Every variant, in declaration order
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(ProfileError::UnknownGender(s.to_owned())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exercise frequency category used to scale BMR
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Little to no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise and a physical job
    VeryActive,
}

impl ActivityLevel {
    /// Every variant, from least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very-active",
        }
    }

    /// Short human description of the category
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Sedentary => "little to no exercise",
            Self::Light => "light exercise 1-3 days/week",
            Self::Moderate => "moderate exercise 3-5 days/week",
            Self::Active => "hard exercise 6-7 days/week",
            Self::VeryActive => "very hard exercise & physical job",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very-active" => Ok(Self::VeryActive),
            _ => Err(ProfileError::UnknownActivityLevel(s.to_owned())),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's biometric profile.
///
/// `last_updated` is `None` only when a stored profile carried a missing or
/// unreadable timestamp; every write through [`Profile::new`] or
/// [`Profile::apply`] stamps it with the caller's `now`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileRecord", into = "ProfileRecord")]
pub struct Profile {
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Age in whole years
    pub age: u32,
    /// Gender for the BMR constant
    pub gender: Gender,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// When the profile was last written
    pub last_updated: Option<DateTime<Utc>>,
}

impl Profile {
    /// Create a validated profile stamped at `now`
    ///
    /// # Errors
    ///
    /// Returns `ProfileError` if height, weight, or age is not positive
    pub fn new<Tz: TimeZone>(
        height_cm: f64,
        weight_kg: f64,
        age: u32,
        gender: Gender,
        activity_level: ActivityLevel,
        now: &DateTime<Tz>,
    ) -> Result<Self, ProfileError> {
        let profile = Self {
            height_cm,
            weight_kg,
            age,
            gender,
            activity_level,
            last_updated: Some(now.with_timezone(&Utc)),
        };
        profile.validate()?;
        Ok(profile)
    }

    /// The setup default (170 cm, 70 kg, 30 years, male, moderate) stamped at `now`
    #[must_use]
    pub fn default_at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self {
            height_cm: profile_defaults::HEIGHT_CM,
            weight_kg: profile_defaults::WEIGHT_KG,
            age: profile_defaults::AGE_YEARS,
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
            last_updated: Some(now.with_timezone(&Utc)),
        }
    }

    /// Check the numeric invariants
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant
    pub fn validate(&self) -> Result<(), ProfileError> {
        if !(self.height_cm.is_finite() && self.height_cm > 0.0) {
            return Err(ProfileError::non_positive("height", self.height_cm));
        }
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0) {
            return Err(ProfileError::non_positive("weight", self.weight_kg));
        }
        if self.age == 0 {
            return Err(ProfileError::InvalidAge(0.0));
        }
        Ok(())
    }

    /// Merge a partial update into a copy of this profile, stamped at `now`
    ///
    /// # Errors
    ///
    /// Returns `ProfileError` if the merged profile violates an invariant
    pub fn apply<Tz: TimeZone>(
        &self,
        update: &ProfileUpdate,
        now: &DateTime<Tz>,
    ) -> Result<Self, ProfileError> {
        let merged = Self {
            height_cm: update.height_cm.unwrap_or(self.height_cm),
            weight_kg: update.weight_kg.unwrap_or(self.weight_kg),
            age: update.age.unwrap_or(self.age),
            gender: update.gender.unwrap_or(self.gender),
            activity_level: update.activity_level.unwrap_or(self.activity_level),
            last_updated: Some(now.with_timezone(&Utc)),
        };
        merged.validate()?;
        Ok(merged)
    }
}

/// Partial profile change; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// New height in centimeters
    #[serde(default, rename = "height", skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// New weight in kilograms
    #[serde(default, rename = "weight", skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// New age in years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// New gender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// New activity level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
}

impl ProfileUpdate {
    /// True when the update carries no field at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.height_cm.is_none()
            && self.weight_kg.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.activity_level.is_none()
    }
}

impl From<&Profile> for ProfileUpdate {
    fn from(profile: &Profile) -> Self {
        Self {
            height_cm: Some(profile.height_cm),
            weight_kg: Some(profile.weight_kg),
            age: Some(profile.age),
            gender: Some(profile.gender),
            activity_level: Some(profile.activity_level),
        }
    }
}

/// Loosely typed on-disk shape of a profile.
///
/// Enumerations stay strings and the timestamp stays raw JSON so that a
/// stored document can be parsed first and validated second: unknown enum
/// values surface as `ProfileError` rather than a generic decode failure,
/// and an unreadable timestamp becomes `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    /// Height in centimeters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Age in years
    pub age: f64,
    /// Gender string
    pub gender: String,
    /// Activity level string
    pub activity_level: String,
    /// RFC 3339 timestamp, possibly missing or malformed
    #[serde(default)]
    pub last_updated: serde_json::Value,
}

impl TryFrom<ProfileRecord> for Profile {
    type Error = ProfileError;

    fn try_from(record: ProfileRecord) -> Result<Self, Self::Error> {
        let gender = record.gender.parse::<Gender>()?;
        let activity_level = record.activity_level.parse::<ActivityLevel>()?;

        if !record.age.is_finite()
            || record.age < 1.0
            || record.age.fract() > 0.0
            || record.age > f64::from(u32::MAX)
        {
            return Err(ProfileError::InvalidAge(record.age));
        }

        // Range and fraction checked above
        let age = record.age as u32;

        let profile = Self {
            height_cm: record.height,
            weight_kg: record.weight,
            age,
            gender,
            activity_level,
            last_updated: parse_timestamp(&record.last_updated),
        };
        profile.validate()?;
        Ok(profile)
    }
}

impl From<Profile> for ProfileRecord {
    fn from(profile: Profile) -> Self {
        Self {
            height: profile.height_cm,
            weight: profile.weight_kg,
            age: f64::from(profile.age),
            gender: profile.gender.as_str().to_owned(),
            activity_level: profile.activity_level.as_str().to_owned(),
            last_updated: profile
                .last_updated
                .map_or(serde_json::Value::Null, |ts| {
                    serde_json::Value::String(ts.to_rfc3339_opts(SecondsFormat::Millis, true))
                }),
        }
    }
}

fn parse_timestamp(raw: &serde_json::Value) -> Option<DateTime<Utc>> {
    raw.as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s.trim()).ok())
        .map(|ts| ts.with_timezone(&Utc))
}
