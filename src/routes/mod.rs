// ABOUTME: Route module organization for FitTrack HTTP endpoints
// ABOUTME: Groups routes by domain and assembles the application router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Route module for the FitTrack server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer or the intelligence crate.

/// Shared request extractors
pub mod extractors;
/// Health check and readiness routes
pub mod health;
/// Meal plan CRUD routes
pub mod meal_plans;
/// Nutrition tools: calorie targets, meal suggestions, macros, snacks, hydration
pub mod nutrition;
/// Goal and progress monitoring routes
pub mod progress;
/// Subject profile CRUD routes
pub mod subjects;
/// Additional tools: supplements, plan validation, report, missed-workout alert
pub mod tools;
/// Workout tracking and recommendation routes
pub mod training;
/// Workout definition CRUD routes
pub mod workouts;

pub use health::HealthRoutes;
pub use meal_plans::MealPlanRoutes;
pub use nutrition::NutritionRoutes;
pub use progress::ProgressRoutes;
pub use subjects::SubjectRoutes;
pub use tools::ToolRoutes;
pub use training::TrainingRoutes;
pub use workouts::WorkoutRoutes;

use std::sync::Arc;

use crate::middleware::apply_middleware;
use crate::resources::ServerResources;
use axum::Router;

/// Build the complete application router with middleware applied
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let config = Arc::clone(&resources.config);

    let router = Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(SubjectRoutes::routes(Arc::clone(&resources)))
        .merge(WorkoutRoutes::routes(Arc::clone(&resources)))
        .merge(MealPlanRoutes::routes(Arc::clone(&resources)))
        .merge(TrainingRoutes::routes(Arc::clone(&resources)))
        .merge(NutritionRoutes::routes(Arc::clone(&resources)))
        .merge(ProgressRoutes::routes(Arc::clone(&resources)))
        .merge(ToolRoutes::routes(resources));

    apply_middleware(router, &config)
}
