// ABOUTME: Filesystem profile store writing one JSON document per storage key
// ABOUTME: userProfile.json and dailyGoal.json under a configurable data directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ProfileRepository;
use crate::constants::storage_keys;
use crate::errors::{AppError, AppResult};
use crate::models::{Profile, ProfileRecord};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// `ProfileRepository` over a directory of JSON documents.
///
/// A missing document reads as `None`. A document that is not valid JSON is
/// a `SerializationError`; a document with an unknown gender or activity
/// level is an `InvalidProfile`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `root`; the directory is created on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the documents
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the document stored under `key`
    #[must_use]
    pub fn document_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let path = self.document_path(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(
                    AppError::storage(format!("failed to read {}: {e}", path.display()))
                        .with_source(e),
                )
            }
        };

        serde_json::from_str(&raw).map(Some).map_err(|e| {
            AppError::serialization(format!("{} is not a valid document: {e}", path.display()))
                .with_source(e)
        })
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        fs::create_dir_all(&self.root).map_err(|e| {
            AppError::storage(format!(
                "failed to create data directory {}: {e}",
                self.root.display()
            ))
            .with_source(e)
        })?;

        let path = self.document_path(key);
        let staging = path.with_extension("json.tmp");
        let body = serde_json::to_string_pretty(value)?;

        fs::write(&staging, body).and_then(|()| fs::rename(&staging, &path)).map_err(|e| {
            AppError::storage(format!("failed to write {}: {e}", path.display())).with_source(e)
        })
    }
}

impl ProfileRepository for JsonFileStore {
    fn get_profile(&self) -> AppResult<Option<Profile>> {
        let Some(record) = self.read::<ProfileRecord>(storage_keys::USER_PROFILE)? else {
            return Ok(None);
        };
        Ok(Some(Profile::try_from(record)?))
    }

    fn put_profile(&self, profile: &Profile) -> AppResult<()> {
        self.write(storage_keys::USER_PROFILE, profile)
    }

    fn get_daily_goal(&self) -> AppResult<Option<u32>> {
        self.read(storage_keys::DAILY_GOAL)
    }

    fn put_daily_goal(&self, goal: u32) -> AppResult<()> {
        self.write(storage_keys::DAILY_GOAL, &goal)
    }
}
