// ABOUTME: Domain service layer for profile and goal orchestration
// ABOUTME: Reusable by the CLI and by any embedding front end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services combine the pure engines in [`crate::intelligence`] with an
//! injected repository. Logging happens here and nowhere below.

/// Profile setup, updates, staleness checks, and goal storage
pub mod profile_service;

pub use profile_service::ProfileService;
