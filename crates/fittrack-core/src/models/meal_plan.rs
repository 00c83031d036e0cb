// ABOUTME: Meal plan definition model with total calorie count
// ABOUTME: Plans are suggested by name filter through the random selector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{non_negative_count, validate_name, MAX_NAME_LEN};
use crate::errors::AppResult;

/// A meal plan definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealPlan {
    /// Unique identifier
    pub id: Uuid,
    /// Plan name
    pub plan_name: String,
    /// Free-text description
    pub description: String,
    /// Total calories of the plan
    pub calories: u32,
    /// When the plan was created
    pub created_at: DateTime<Utc>,
}

/// Body for creating or replacing a meal plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanRequest {
    /// Plan name
    pub plan_name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Total calories (must not be negative)
    pub calories: i64,
}

impl MealPlan {
    /// Build a new meal plan from a validated request
    pub fn from_request(request: MealPlanRequest) -> AppResult<Self> {
        validate_name("plan_name", &request.plan_name, MAX_NAME_LEN)?;
        let calories = non_negative_count("calories", request.calories)?;
        Ok(Self {
            id: Uuid::new_v4(),
            plan_name: request.plan_name.trim().to_owned(),
            description: request.description,
            calories,
            created_at: Utc::now(),
        })
    }

    /// Replace the mutable fields from a validated request
    pub fn apply(&mut self, request: MealPlanRequest) -> AppResult<()> {
        validate_name("plan_name", &request.plan_name, MAX_NAME_LEN)?;
        self.calories = non_negative_count("calories", request.calories)?;
        self.plan_name = request.plan_name.trim().to_owned();
        self.description = request.description;
        Ok(())
    }

    /// Case-insensitive name match used by meal plan suggestions
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.plan_name
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}
