// ABOUTME: Domain models re-exported from fittrack-core
// ABOUTME: Subjects, workouts, progress entries, and meal plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

pub use fittrack_core::models::*;
