// ABOUTME: SQLite record store for subjects, workouts, progress entries, and meal plans
// ABOUTME: Owns the connection pool and runs idempotent schema migrations on startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! # Database Management
//!
//! `Database` wraps a sqlx `SQLite` pool. Each table's queries live in their own
//! file as an `impl Database` block. Identifiers are stored as TEXT and parsed
//! back into [`Uuid`] on read.

mod meal_plans;
mod progress;
mod subjects;
mod workouts;

use std::str::FromStr;
use std::time::Instant;

use crate::config::DatabaseUrl;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use tracing::info;
use uuid::Uuid;

/// Database manager for the FitTrack record store
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open (creating if needed) the database and run migrations
    ///
    /// In-memory databases use a single long-lived connection; every new
    /// connection to `sqlite::memory:` would otherwise see an empty database.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn new(url: &DatabaseUrl) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(&url.to_connection_string())?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if url.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options.connect_with(options).await?;
        let db = Self { pool };
        db.migrate().await?;

        info!(database = %url, "Database ready");
        Ok(db)
    }

    /// Close every pooled connection, flushing pending writes to disk
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connections closed");
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any table or index cannot be created
    pub async fn migrate(&self) -> AppResult<()> {
        let started = Instant::now();

        // Progress entries reference subjects, so subjects come first
        self.migrate_subjects().await?;
        self.migrate_workouts().await?;
        self.migrate_meal_plans().await?;
        self.migrate_progress().await?;

        AppLogger::log_database_operation("migrate", "*", true, elapsed_ms(started));
        Ok(())
    }

    /// Round-trip a trivial query; used by the readiness probe
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Parse an id column stored as TEXT
fn parse_uuid(raw: &str, column: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|e| AppError::database(format!("Invalid UUID in column {column}: {e}")))
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
