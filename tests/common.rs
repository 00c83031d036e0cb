// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory database, server resources, and record seeding helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fittrack_server`

use std::sync::{Arc, Once};

use anyhow::Result;
use chrono::NaiveDate;
use fittrack_intelligence::SeededSelector;
use fittrack_server::{
    config::{DatabaseUrl, ServerConfig},
    database::Database,
    models::{
        Difficulty, MealPlan, MealPlanRequest, NewProgressEntry, ProgressEntry, Subject,
        SubjectRequest, Workout, WorkoutRequest,
    },
    resources::ServerResources,
};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Seed used for the recommendation selector in tests
pub const TEST_SEED: u64 = 42;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Configuration pointing at an in-memory database
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database: DatabaseUrl::Memory,
        recommendation_seed: Some(TEST_SEED),
        ..ServerConfig::default()
    }
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new(&DatabaseUrl::Memory).await?)
}

/// Server resources over a fresh in-memory database with a seeded selector
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    create_test_resources_with_seed(TEST_SEED).await
}

/// Server resources with an explicit selector seed
pub async fn create_test_resources_with_seed(seed: u64) -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    Ok(Arc::new(ServerResources::with_selector(
        database,
        Arc::new(SeededSelector::from_seed(seed)),
        test_config(),
    )))
}

/// Store a subject with the given username and profile weight
pub async fn create_test_subject(
    database: &Database,
    username: &str,
    weight_kg: Option<f64>,
) -> Result<Subject> {
    let subject = Subject::from_request(SubjectRequest {
        username: username.to_owned(),
        age: Some(30),
        height_cm: Some(175.0),
        weight_kg,
    })?;
    database.create_subject(&subject).await?;
    Ok(subject)
}

/// Store a workout
pub async fn create_test_workout(
    database: &Database,
    name: &str,
    duration_minutes: u32,
    calories_burned_estimate: f64,
    difficulty: Option<Difficulty>,
) -> Result<Workout> {
    let workout = Workout::from_request(WorkoutRequest {
        name: name.to_owned(),
        description: format!("{name} session"),
        duration_minutes,
        calories_burned_estimate,
        difficulty,
    })?;
    database.create_workout(&workout).await?;
    Ok(workout)
}

/// Store a meal plan
pub async fn create_test_meal_plan(
    database: &Database,
    plan_name: &str,
    calories: i64,
) -> Result<MealPlan> {
    let plan = MealPlan::from_request(MealPlanRequest {
        plan_name: plan_name.to_owned(),
        description: String::new(),
        calories,
    })?;
    database.create_meal_plan(&plan).await?;
    Ok(plan)
}

/// Record a progress entry on an explicit date
pub async fn record_entry(
    database: &Database,
    subject_id: Uuid,
    date: NaiveDate,
    weight_kg: f64,
    workouts_completed: u32,
) -> Result<ProgressEntry> {
    let entry = NewProgressEntry {
        subject_id,
        weight_kg,
        workouts_completed,
        notes: String::new(),
    };
    Ok(database.create_progress_entry(&entry, date).await?)
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
