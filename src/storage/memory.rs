// ABOUTME: In-memory profile store backed by a lock-guarded slot
// ABOUTME: Used by tests and by callers that manage persistence themselves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ProfileRepository;
use crate::errors::{AppError, AppResult};
use crate::models::Profile;
use std::sync::RwLock;

#[derive(Debug, Default)]
struct Slots {
    profile: Option<Profile>,
    daily_goal: Option<u32>,
}

/// Process-local `ProfileRepository`
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    slots: RwLock<Slots>,
}

impl InMemoryProfileStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a profile
    #[must_use]
    pub fn with_profile(profile: Profile) -> Self {
        Self {
            slots: RwLock::new(Slots {
                profile: Some(profile),
                daily_goal: None,
            }),
        }
    }
}

fn poisoned() -> AppError {
    AppError::internal("in-memory profile store lock poisoned")
}

impl ProfileRepository for InMemoryProfileStore {
    fn get_profile(&self) -> AppResult<Option<Profile>> {
        Ok(self.slots.read().map_err(|_| poisoned())?.profile.clone())
    }

    fn put_profile(&self, profile: &Profile) -> AppResult<()> {
        self.slots.write().map_err(|_| poisoned())?.profile = Some(profile.clone());
        Ok(())
    }

    fn get_daily_goal(&self) -> AppResult<Option<u32>> {
        Ok(self.slots.read().map_err(|_| poisoned())?.daily_goal)
    }

    fn put_daily_goal(&self, goal: u32) -> AppResult<()> {
        self.slots.write().map_err(|_| poisoned())?.daily_goal = Some(goal);
        Ok(())
    }
}
