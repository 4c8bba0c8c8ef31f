// ABOUTME: Re-export of formula constants, profile defaults, and storage keys
// ABOUTME: Values are defined once in calorie-core and shared by every layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use calorie_core::constants::*;
