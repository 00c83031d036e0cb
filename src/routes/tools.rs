// ABOUTME: Route handlers for additional tools
// ABOUTME: Supplement suggestions, workout plan validation, fitness report, missed-workout alert
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use std::sync::Arc;

use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::routes::extractors::PathId;
use crate::services::progress;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use fittrack_intelligence::nutrition::suggest_supplements;
use fittrack_intelligence::training::validate_workout_plan;
use fittrack_intelligence::{ReportAggregator, TrendEngine};
use serde::Deserialize;

/// Query parameters for supplement suggestions
#[derive(Debug, Default, Deserialize)]
pub struct SupplementsQuery {
    /// Diet (defaults to `omnivore`)
    pub diet: Option<String>,
    /// Training goal (defaults to `general`)
    pub goal: Option<String>,
}

/// Body for the workout plan check
#[derive(Debug, Default, Deserialize)]
pub struct WorkoutPlanRequest {
    /// Workout names making up the plan
    #[serde(default)]
    pub workouts: Vec<String>,
}

/// Additional tool routes handler
pub struct ToolRoutes;

impl ToolRoutes {
    /// Create all additional tool routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/suggest/supplements", get(Self::handle_supplements))
            .route(
                "/api/validate/workout-plan",
                post(Self::handle_workout_plan),
            )
            .route(
                "/api/generate/fitness-report/:subject_id",
                get(Self::handle_report),
            )
            .route(
                "/api/alert/missing-workouts/:subject_id",
                get(Self::handle_missing_workouts),
            )
            .with_state(resources)
    }

    /// Handle GET /api/suggest/supplements
    async fn handle_supplements(Query(query): Query<SupplementsQuery>) -> Json<serde_json::Value> {
        let supplements = suggest_supplements(
            query.diet.as_deref().unwrap_or("omnivore"),
            query.goal.as_deref().unwrap_or("general"),
        );
        Json(serde_json::json!({ "supplements": supplements }))
    }

    /// Handle POST /api/validate/workout-plan
    async fn handle_workout_plan(Json(body): Json<WorkoutPlanRequest>) -> Response {
        Json(validate_workout_plan(&body.workouts)).into_response()
    }

    /// Handle GET /api/generate/fitness-report/:subject_id
    async fn handle_report(
        State(resources): State<Arc<ServerResources>>,
        PathId(subject_id): PathId,
    ) -> Result<Response, AppError> {
        let report = ReportAggregator::generate(&resources.database, subject_id).await?;
        Ok(Json(report).into_response())
    }

    /// Handle GET /api/alert/missing-workouts/:subject_id
    async fn handle_missing_workouts(
        State(resources): State<Arc<ServerResources>>,
        PathId(subject_id): PathId,
    ) -> Result<Response, AppError> {
        let alert = TrendEngine::new(&resources.database)
            .missing_workout_alert(subject_id, progress::today())
            .await?;
        Ok(Json(alert).into_response())
    }
}
