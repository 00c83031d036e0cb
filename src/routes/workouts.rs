// ABOUTME: Route handlers for workout definition CRUD
// ABOUTME: Listing accepts an optional difficulty filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use std::sync::Arc;

use crate::errors::AppError;
use crate::models::{Difficulty, Workout, WorkoutRequest};
use crate::resources::ServerResources;
use crate::routes::extractors::PathId;
use crate::services::workouts::require_workout;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

/// Query parameters shared by workout listing and recommendation
#[derive(Debug, Default, Deserialize)]
pub struct DifficultyQuery {
    /// Optional difficulty tier (case-insensitive)
    pub difficulty: Option<String>,
}

impl DifficultyQuery {
    /// Parse the tier, treating an empty value as no filter
    pub fn parse(&self) -> Result<Option<Difficulty>, AppError> {
        self.difficulty
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(str::parse::<Difficulty>)
            .transpose()
    }
}

/// Workout routes handler
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout CRUD routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/workouts",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/workouts/:id",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle POST /api/workouts
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<WorkoutRequest>,
    ) -> Result<Response, AppError> {
        let workout = Workout::from_request(body)?;
        resources.database.create_workout(&workout).await?;
        Ok((StatusCode::CREATED, Json(workout)).into_response())
    }

    /// Handle GET /api/workouts
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<DifficultyQuery>,
    ) -> Result<Response, AppError> {
        let workouts = resources.database.list_workouts(query.parse()?).await?;
        Ok(Json(workouts).into_response())
    }

    /// Handle GET /api/workouts/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        PathId(id): PathId,
    ) -> Result<Response, AppError> {
        let workout = require_workout(&resources.database, id).await?;
        Ok(Json(workout).into_response())
    }

    /// Handle PUT /api/workouts/:id
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        PathId(id): PathId,
        Json(body): Json<WorkoutRequest>,
    ) -> Result<Response, AppError> {
        let mut workout = require_workout(&resources.database, id).await?;
        workout.apply(body)?;
        resources.database.update_workout(&workout).await?;
        Ok(Json(workout).into_response())
    }

    /// Handle DELETE /api/workouts/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        PathId(id): PathId,
    ) -> Result<Response, AppError> {
        resources.database.delete_workout(id).await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
