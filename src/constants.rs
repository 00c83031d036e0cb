// ABOUTME: Server-level constants: service identity, environment keys, and defaults
// ABOUTME: Formula constants live in fittrack-core and are re-exported here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

pub use fittrack_core::constants::{calories, defaults as request_defaults, goals, macros, units};

/// Service names used in structured logs
pub mod service_names {
    /// Main server binary
    pub const FITTRACK_SERVER: &str = "fittrack-server";
}

/// Environment variable names read by the configuration layer
pub mod env_keys {
    /// HTTP listener port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// HTTP listener interface
    pub const HOST: &str = "HOST";
    /// Database URL
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    /// Optional u64 seed for the recommendation selector
    pub const RECOMMENDATION_SEED: &str = "RECOMMENDATION_SEED";
    /// Per-request timeout
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Comma-separated CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}

/// Configuration defaults
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8081;
    /// Default bind interface
    pub const HOST: &str = "127.0.0.1";
    /// Default database file
    pub const DATABASE_URL: &str = "sqlite:./data/fittrack.db";
    /// Default request timeout
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Request header carrying the per-request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";
