// ABOUTME: Error handling re-exported from fittrack-core
// ABOUTME: AppError and ErrorCode are shared by the store, services, and routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! # Unified Error Handling System
//!
//! The types live in `fittrack-core` so the intelligence crate can report the
//! same errors; the `http-response` and `database-errors` features supply the
//! axum and sqlx conversions used here.

pub use fittrack_core::errors::{
    AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails,
};
