// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Combines record store lookups with the intelligence calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Domain service layer
//!
//! Handlers stay thin: they parse the request, call one function here or in
//! `fittrack-intelligence`, and serialize the result.

/// Workout recommendation, calorie burn, and comparison
pub mod workouts;

/// Daily calorie targets and meal plan suggestions
pub mod nutrition;

/// Recording and listing progress entries
pub mod progress;
