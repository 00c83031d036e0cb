// ABOUTME: Route handlers for nutrition tools
// ABOUTME: Daily calorie target, meal plan suggestion, macro split, snacks, hydration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use std::collections::HashMap;
use std::sync::Arc;

use crate::constants::macros::DEFAULT_CALORIES;
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::nutrition::{self, DEFAULT_MEAL_TYPE};
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use fittrack_intelligence::metrics::{macro_split, MacroRatio};
use fittrack_intelligence::nutrition::{validate_hydration, HEALTHY_SNACKS};
use serde::Deserialize;
use uuid::Uuid;

/// Body for the daily calorie recommendation
#[derive(Debug, Default, Deserialize)]
pub struct DailyCaloriesRequest {
    /// Subject the target is for
    #[serde(default, alias = "user_id")]
    pub subject_id: Option<Uuid>,
    /// `lose_weight`, `gain_weight`, or anything else for maintenance
    pub goal: Option<String>,
}

/// Query parameters for the meal plan suggestion
#[derive(Debug, Default, Deserialize)]
pub struct MealPlanQuery {
    /// Name filter; `default` disables filtering
    #[serde(rename = "type")]
    pub meal_type: Option<String>,
}

/// Body for the macro calculator
#[derive(Debug, Default, Deserialize)]
pub struct MacrosRequest {
    /// Total calories (defaults to 2000)
    pub calories: Option<f64>,
    /// Shares keyed `protein`, `fat`, `carbs` (defaults to 0.3 / 0.2 / 0.5)
    pub ratio: Option<HashMap<String, f64>>,
}

/// Body for the hydration check
#[derive(Debug, Default, Deserialize)]
pub struct HydrationRequest {
    /// Liters drunk today (defaults to 0)
    pub water_intake_liters: Option<f64>,
}

/// Nutrition routes handler
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create all nutrition routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/recommend/daily-calories",
                post(Self::handle_daily_calories),
            )
            .route("/api/suggest/meal-plan", get(Self::handle_meal_plan))
            .route("/api/calculate/macros", post(Self::handle_macros))
            .route("/api/find/healthy-snacks", get(Self::handle_snacks))
            .route("/api/validate/hydration", post(Self::handle_hydration))
            .with_state(resources)
    }

    /// Handle POST /api/recommend/daily-calories
    async fn handle_daily_calories(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<DailyCaloriesRequest>,
    ) -> Result<Response, AppError> {
        let subject_id = body
            .subject_id
            .ok_or_else(|| AppError::missing_field("subject_id"))?;
        let goal = body.goal.as_deref().unwrap_or("maintain");
        let calories =
            nutrition::recommend_daily_calories(&resources.database, subject_id, goal).await?;
        Ok(Json(serde_json::json!({ "recommended_calories_per_day": calories })).into_response())
    }

    /// Handle GET /api/suggest/meal-plan
    async fn handle_meal_plan(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<MealPlanQuery>,
    ) -> Result<Response, AppError> {
        let meal_type = query.meal_type.as_deref().unwrap_or(DEFAULT_MEAL_TYPE);
        let plan = nutrition::suggest_meal_plan(
            &resources.database,
            resources.selector.as_ref(),
            meal_type,
        )
        .await?;
        Ok(Json(plan).into_response())
    }

    /// Handle POST /api/calculate/macros
    async fn handle_macros(Json(body): Json<MacrosRequest>) -> Result<Response, AppError> {
        let ratio = match body.ratio {
            Some(map) => MacroRatio::from_map(&map)?,
            None => MacroRatio::default(),
        };
        let split = macro_split(body.calories.unwrap_or(DEFAULT_CALORIES), &ratio);
        Ok(Json(split).into_response())
    }

    /// Handle GET /api/find/healthy-snacks
    async fn handle_snacks() -> Json<serde_json::Value> {
        Json(serde_json::json!({ "healthy_snacks": HEALTHY_SNACKS }))
    }

    /// Handle POST /api/validate/hydration
    async fn handle_hydration(Json(body): Json<HydrationRequest>) -> Result<Response, AppError> {
        let check = validate_hydration(body.water_intake_liters.unwrap_or(0.0))?;
        Ok(Json(check).into_response())
    }
}
