// ABOUTME: Route handlers for workout tracking and recommendations
// ABOUTME: Random workout pick, calorie burn, exercise history, rest days, stretching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use std::sync::Arc;

use crate::constants::request_defaults::USER_WEIGHT_KG;
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::routes::extractors::PathId;
use crate::routes::workouts::DifficultyQuery;
use crate::services::{progress, workouts};
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use fittrack_intelligence::training::STRETCHING_ROUTINE;
use fittrack_intelligence::TrendEngine;
use serde::Deserialize;
use uuid::Uuid;

/// Body for the calorie burn calculator
#[derive(Debug, Default, Deserialize)]
pub struct CaloriesBurnedRequest {
    /// Workout to estimate
    pub workout_id: Option<Uuid>,
    /// Subject weight in kilograms (defaults to 70)
    pub user_weight: Option<f64>,
}

/// Workout tracking routes handler
pub struct TrainingRoutes;

impl TrainingRoutes {
    /// Create all workout tracking routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recommend/workout", get(Self::handle_recommend))
            .route(
                "/api/calculate/calories-burned",
                post(Self::handle_calories_burned),
            )
            .route(
                "/api/track/exercise-progress/:subject_id",
                get(Self::handle_exercise_progress),
            )
            .route(
                "/api/suggest/rest-days/:subject_id",
                get(Self::handle_rest_days),
            )
            .route(
                "/api/get/stretching-routine",
                get(Self::handle_stretching_routine),
            )
            .with_state(resources)
    }

    /// Handle GET /api/recommend/workout
    async fn handle_recommend(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<DifficultyQuery>,
    ) -> Result<Response, AppError> {
        let workout = workouts::recommend_workout(
            &resources.database,
            resources.selector.as_ref(),
            query.parse()?,
        )
        .await?;
        Ok(Json(workout).into_response())
    }

    /// Handle POST /api/calculate/calories-burned
    async fn handle_calories_burned(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<CaloriesBurnedRequest>,
    ) -> Result<Response, AppError> {
        let workout_id = body
            .workout_id
            .ok_or_else(|| AppError::missing_field("workout_id"))?;
        let calories = workouts::calories_burned(
            &resources.database,
            workout_id,
            body.user_weight.unwrap_or(USER_WEIGHT_KG),
        )
        .await?;
        Ok(Json(serde_json::json!({ "calories_burned": calories })).into_response())
    }

    /// Handle GET /api/track/exercise-progress/:subject_id
    async fn handle_exercise_progress(
        State(resources): State<Arc<ServerResources>>,
        PathId(subject_id): PathId,
    ) -> Result<Response, AppError> {
        let entries = progress::exercise_progress(&resources.database, subject_id).await?;
        Ok(Json(entries).into_response())
    }

    /// Handle GET /api/suggest/rest-days/:subject_id
    async fn handle_rest_days(
        State(resources): State<Arc<ServerResources>>,
        PathId(subject_id): PathId,
    ) -> Result<Response, AppError> {
        let suggestion = TrendEngine::new(&resources.database)
            .suggest_rest_days(subject_id)
            .await?;
        Ok(Json(suggestion).into_response())
    }

    /// Handle GET /api/get/stretching-routine
    async fn handle_stretching_routine() -> Json<serde_json::Value> {
        Json(serde_json::json!({ "stretching_routine": STRETCHING_ROUTINE }))
    }
}
