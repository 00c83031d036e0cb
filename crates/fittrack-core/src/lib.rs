// ABOUTME: Core types and constants for the FitTrack fitness tracking API
// ABOUTME: Foundation crate with error handling, domain models, and formula constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![deny(unsafe_code)]

//! # FitTrack Core
//!
//! Foundation crate providing shared types and constants for the FitTrack
//! API. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Conversion factors and formula constants
//! - **models**: Subjects, workouts, progress entries, and meal plans

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Conversion factors and formula constants organized by domain
pub mod constants;

/// Core data models (Subject, Workout, `ProgressEntry`, `MealPlan`)
pub mod models;
