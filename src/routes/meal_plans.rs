// ABOUTME: Route handlers for meal plan CRUD
// ABOUTME: Listing accepts an optional case-insensitive name filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use std::sync::Arc;

use crate::errors::AppError;
use crate::models::{MealPlan, MealPlanRequest};
use crate::resources::ServerResources;
use crate::routes::extractors::PathId;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

/// Query parameters for listing meal plans
#[derive(Debug, Default, Deserialize)]
pub struct ListMealPlansQuery {
    /// Keep plans whose name contains this text
    pub name_contains: Option<String>,
}

/// Meal plan routes handler
pub struct MealPlanRoutes;

impl MealPlanRoutes {
    /// Create all meal plan CRUD routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/meal-plans",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/meal-plans/:id",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    async fn load(resources: &ServerResources, id: Uuid) -> Result<MealPlan, AppError> {
        resources
            .database
            .get_meal_plan(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Meal plan {id}")))
    }

    /// Handle POST /api/meal-plans
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<MealPlanRequest>,
    ) -> Result<Response, AppError> {
        let plan = MealPlan::from_request(body)?;
        resources.database.create_meal_plan(&plan).await?;
        Ok((StatusCode::CREATED, Json(plan)).into_response())
    }

    /// Handle GET /api/meal-plans
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<ListMealPlansQuery>,
    ) -> Result<Response, AppError> {
        let filter = query.name_contains.as_deref().filter(|s| !s.is_empty());
        let plans = resources.database.list_meal_plans(filter).await?;
        Ok(Json(plans).into_response())
    }

    /// Handle GET /api/meal-plans/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        PathId(id): PathId,
    ) -> Result<Response, AppError> {
        let plan = Self::load(&resources, id).await?;
        Ok(Json(plan).into_response())
    }

    /// Handle PUT /api/meal-plans/:id
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        PathId(id): PathId,
        Json(body): Json<MealPlanRequest>,
    ) -> Result<Response, AppError> {
        let mut plan = Self::load(&resources, id).await?;
        plan.apply(body)?;
        resources.database.update_meal_plan(&plan).await?;
        Ok(Json(plan).into_response())
    }

    /// Handle DELETE /api/meal-plans/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        PathId(id): PathId,
    ) -> Result<Response, AppError> {
        resources.database.delete_meal_plan(id).await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
