// ABOUTME: Route handlers for goal and progress monitoring
// ABOUTME: Goal projection, weekly change, recording progress, comparison, trends, conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use std::sync::Arc;

use crate::constants::request_defaults::{CURRENT_WEIGHT_KG, GOAL_WEIGHT_KG};
use crate::errors::AppError;
use crate::models::RecordProgressRequest;
use crate::resources::ServerResources;
use crate::routes::extractors::PathId;
use crate::services::{progress, workouts};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use fittrack_intelligence::metrics::weekly_weight_change;
use fittrack_intelligence::{units, GoalProjector, TrendEngine};
use serde::Deserialize;
use uuid::Uuid;

/// Query parameters for the goal projection
#[derive(Debug, Default, Deserialize)]
pub struct GoalQuery {
    /// Target weight in kilograms
    pub target_weight: Option<f64>,
}

/// Body for the weekly weight change calculator
#[derive(Debug, Default, Deserialize)]
pub struct WeightChangeRequest {
    /// Current weight (defaults to 70)
    pub current_weight: Option<f64>,
    /// Goal weight (defaults to 65)
    pub goal_weight: Option<f64>,
}

/// Query parameters for comparing two workouts
#[derive(Debug, Default, Deserialize)]
pub struct CompareQuery {
    /// First workout
    pub workout1: Option<Uuid>,
    /// Second workout
    pub workout2: Option<Uuid>,
}

/// Query parameters for the unit converter
#[derive(Debug, Default, Deserialize)]
pub struct ConvertQuery {
    /// Value to convert (defaults to 0)
    pub value: Option<f64>,
    /// Source unit (defaults to `kg`)
    pub unit: Option<String>,
}

/// Goal and progress routes handler
pub struct ProgressRoutes;

impl ProgressRoutes {
    /// Create all goal and progress routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/predict/goal-achievement/:subject_id",
                get(Self::handle_goal_achievement),
            )
            .route(
                "/api/calculate/weight-loss-gain",
                post(Self::handle_weight_change),
            )
            .route(
                "/api/track/weight-progress",
                post(Self::handle_record_progress),
            )
            .route("/api/compare/workouts", get(Self::handle_compare))
            .route(
                "/api/check/progress-trends/:subject_id",
                get(Self::handle_trend),
            )
            .route(
                "/api/convert/measurement-units",
                get(Self::handle_convert),
            )
            .with_state(resources)
    }

    /// Handle GET /api/predict/goal-achievement/:subject_id
    async fn handle_goal_achievement(
        State(resources): State<Arc<ServerResources>>,
        PathId(subject_id): PathId,
        Query(query): Query<GoalQuery>,
    ) -> Result<Response, AppError> {
        let target = query
            .target_weight
            .ok_or_else(|| AppError::missing_field("target_weight"))?;
        let projection = GoalProjector::project_for_subject(
            &resources.database,
            subject_id,
            target,
            progress::today(),
        )
        .await?;
        Ok(Json(projection).into_response())
    }

    /// Handle POST /api/calculate/weight-loss-gain
    async fn handle_weight_change(Json(body): Json<WeightChangeRequest>) -> Json<serde_json::Value> {
        let change = weekly_weight_change(
            body.current_weight.unwrap_or(CURRENT_WEIGHT_KG),
            body.goal_weight.unwrap_or(GOAL_WEIGHT_KG),
        );
        Json(serde_json::json!({ "weekly_weight_change": change }))
    }

    /// Handle POST /api/track/weight-progress
    async fn handle_record_progress(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<RecordProgressRequest>,
    ) -> Result<Response, AppError> {
        let entry =
            progress::record_progress(&resources.database, body, progress::today()).await?;
        Ok((StatusCode::CREATED, Json(entry)).into_response())
    }

    /// Handle GET /api/compare/workouts
    async fn handle_compare(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<CompareQuery>,
    ) -> Result<Response, AppError> {
        let first = query
            .workout1
            .ok_or_else(|| AppError::missing_field("workout1"))?;
        let second = query
            .workout2
            .ok_or_else(|| AppError::missing_field("workout2"))?;
        let comparison = workouts::compare_workouts(&resources.database, first, second).await?;
        Ok(Json(comparison).into_response())
    }

    /// Handle GET /api/check/progress-trends/:subject_id
    async fn handle_trend(
        State(resources): State<Arc<ServerResources>>,
        PathId(subject_id): PathId,
    ) -> Result<Response, AppError> {
        let trend = TrendEngine::new(&resources.database)
            .progress_trend(subject_id)
            .await?;
        Ok(Json(serde_json::json!({ "trend": trend.label() })).into_response())
    }

    /// Handle GET /api/convert/measurement-units
    async fn handle_convert(Query(query): Query<ConvertQuery>) -> Result<Response, AppError> {
        let conversion = units::convert(
            query.value.unwrap_or(0.0),
            query.unit.as_deref().unwrap_or("kg"),
        )?;
        Ok(Json(conversion).into_response())
    }
}
