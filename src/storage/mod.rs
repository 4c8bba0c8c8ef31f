// ABOUTME: Storage abstraction for the profile singleton and the daily goal
// ABOUTME: ProfileRepository trait with in-memory and JSON file implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Storage
//!
//! The engine never touches a persistence mechanism directly; it is handed a
//! [`ProfileRepository`]. Both values are last-write-wins singletons.

/// JSON document per key on the local filesystem
pub mod json_file;

/// Process-local store for tests and embedding
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::InMemoryProfileStore;

use crate::errors::AppResult;
use crate::models::Profile;

/// Profile and daily goal persistence
pub trait ProfileRepository {
    /// Load the stored profile, if one has been set up
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or holds an invalid profile
    fn get_profile(&self) -> AppResult<Option<Profile>>;

    /// Replace the stored profile
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    fn put_profile(&self, profile: &Profile) -> AppResult<()>;

    /// Load the stored daily goal in kcal, if one has been saved
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    fn get_daily_goal(&self) -> AppResult<Option<u32>>;

    /// Replace the stored daily goal
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    fn put_daily_goal(&self, goal: u32) -> AppResult<()>;
}

impl<R: ProfileRepository + ?Sized> ProfileRepository for &R {
    fn get_profile(&self) -> AppResult<Option<Profile>> {
        (**self).get_profile()
    }

    fn put_profile(&self, profile: &Profile) -> AppResult<()> {
        (**self).put_profile(profile)
    }

    fn get_daily_goal(&self) -> AppResult<Option<u32>> {
        (**self).get_daily_goal()
    }

    fn put_daily_goal(&self, goal: u32) -> AppResult<()> {
        (**self).put_daily_goal(goal)
    }
}
