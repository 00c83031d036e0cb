// ABOUTME: Workout business logic: random recommendation, calorie burn, comparison
// ABOUTME: Resolves workouts from the record store before running the calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use crate::database::Database;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::logging::AppLogger;
use crate::models::{Difficulty, Workout};
use fittrack_intelligence::metrics::{self, WorkoutComparison};
use fittrack_intelligence::selection::{choose, RandomSource};
use uuid::Uuid;

/// Fetch a workout or fail with `NotFound`
pub async fn require_workout(database: &Database, workout_id: Uuid) -> AppResult<Workout> {
    database
        .get_workout(workout_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Workout {workout_id}")))
}

/// Pick one workout uniformly at random, optionally within a difficulty tier
///
/// # Errors
///
/// `NotFound` when no workout matches.
pub async fn recommend_workout(
    database: &Database,
    selector: &dyn RandomSource,
    difficulty: Option<Difficulty>,
) -> AppResult<Workout> {
    let candidates = database.list_workouts(difficulty).await?;
    let chosen = choose(selector, &candidates)?.cloned();

    AppLogger::log_recommendation(
        "workout",
        candidates.len(),
        chosen.as_ref().map(|w| w.name.as_str()),
    );
    chosen.ok_or_else(|| AppError::new(ErrorCode::ResourceNotFound, "No workouts found"))
}

/// Calories burned doing a stored workout at `user_weight` kilograms
///
/// # Errors
///
/// `NotFound` for an unknown workout, `InvalidInput` for a negative weight.
pub async fn calories_burned(
    database: &Database,
    workout_id: Uuid,
    user_weight: f64,
) -> AppResult<f64> {
    let workout = require_workout(database, workout_id).await?;
    metrics::calories_burned(workout.duration_minutes, user_weight)
}

/// Compare two stored workouts
///
/// # Errors
///
/// `NotFound` if either id does not resolve.
pub async fn compare_workouts(
    database: &Database,
    first: Uuid,
    second: Uuid,
) -> AppResult<WorkoutComparison> {
    let a = require_workout(database, first).await?;
    let b = require_workout(database, second).await?;
    Ok(metrics::compare_workouts(&a, &b))
}
