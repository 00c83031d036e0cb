// ABOUTME: Nutrition business logic: per-subject calorie targets and meal plan suggestions
// ABOUTME: Meal plans are filtered by name and picked through the injected selector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use crate::database::Database;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::logging::AppLogger;
use crate::models::MealPlan;
use fittrack_intelligence::nutrition::{self, CalorieGoal};
use fittrack_intelligence::selection::{choose, RandomSource};
use uuid::Uuid;

/// Meal type that disables name filtering
pub const DEFAULT_MEAL_TYPE: &str = "default";

/// Daily calorie target for an existing subject
///
/// # Errors
///
/// `NotFound` for an unknown subject.
pub async fn recommend_daily_calories(
    database: &Database,
    subject_id: Uuid,
    goal: &str,
) -> AppResult<i64> {
    if database.get_subject(subject_id).await?.is_none() {
        return Err(AppError::not_found(format!("Subject {subject_id}")));
    }
    Ok(nutrition::recommend_daily_calories(
        CalorieGoal::from_str_lossy(goal),
    ))
}

/// Pick a meal plan at random; any type other than `default` filters plan
/// names containing it (case-insensitive)
///
/// # Errors
///
/// `NotFound` when no plan matches.
pub async fn suggest_meal_plan(
    database: &Database,
    selector: &dyn RandomSource,
    meal_type: &str,
) -> AppResult<MealPlan> {
    let filter = (meal_type != DEFAULT_MEAL_TYPE).then_some(meal_type);
    let candidates = database.list_meal_plans(filter).await?;
    let chosen = choose(selector, &candidates)?.cloned();

    AppLogger::log_recommendation(
        "meal_plan",
        candidates.len(),
        chosen.as_ref().map(|p| p.plan_name.as_str()),
    );
    chosen.ok_or_else(|| AppError::new(ErrorCode::ResourceNotFound, "No meal plans found"))
}
