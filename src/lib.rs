// ABOUTME: Main library entry point for the FitTrack fitness tracking API
// ABOUTME: Wires configuration, the SQLite record store, services, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![deny(unsafe_code)]

//! # FitTrack Server
//!
//! A JSON-over-HTTP backend for tracking workouts, meal plans, and body
//! weight progress, with derived metrics on top of the stored history.
//!
//! ## Architecture
//!
//! - **Config**: Environment-driven server settings
//! - **Database**: `SQLite` record store for subjects, workouts, meal plans, and progress
//! - **Services**: Store-backed operations such as recommendations and progress recording
//! - **Routes**: Axum routers grouped by concern, each built from shared [`resources::ServerResources`]
//!
//! Pure calculators and the trend components live in `fittrack-intelligence`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fittrack_server::config::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("FitTrack configured on {}", config.bind_address());
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Server-level constants and environment keys
pub mod constants;

/// `SQLite` record store
pub mod database;

/// Error types shared with the core crate
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware stack
pub mod middleware;

/// Domain models
pub mod models;

/// Shared handler state
pub mod resources;

/// HTTP route groups
pub mod routes;

/// Store-backed operations used by the routes
pub mod services;
