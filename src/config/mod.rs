// ABOUTME: Configuration module for server settings loaded at startup
// ABOUTME: Re-exports the environment-driven ServerConfig and its typed fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Configuration module for the FitTrack server
//!
//! All settings come from environment variables; see
//! [`environment::ServerConfig::from_env`].

/// Environment and server configuration
pub mod environment;

pub use environment::{DatabaseUrl, Environment, LogLevel, ServerConfig};
