// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for calorie-cli
// ABOUTME: Provides access to profile, goal, and status commands

pub mod goal;
pub mod profile;
pub mod status;
