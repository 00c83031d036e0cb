// ABOUTME: Domain models for the four record types owned by the record store
// ABOUTME: Subject, Workout, ProgressEntry, and MealPlan plus their validated inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

mod meal_plan;
mod progress;
mod subject;
mod workout;

pub use meal_plan::{MealPlan, MealPlanRequest};
pub use progress::{NewProgressEntry, ProgressEntry, RecordProgressRequest};
pub use subject::{Subject, SubjectRequest};
pub use workout::{Difficulty, Workout, WorkoutRequest, WorkoutSummary};

use crate::errors::{AppError, AppResult};

/// Maximum length of a subject username
pub const MAX_USERNAME_LEN: usize = 50;

/// Maximum length of workout and meal plan names
pub const MAX_NAME_LEN: usize = 100;

/// Reject blank or over-long names
pub(crate) fn validate_name(field: &str, value: &str, max_len: usize) -> AppResult<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::missing_field(field));
    }
    if trimmed.chars().count() > max_len {
        return Err(AppError::invalid_input(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

/// Reject negative, zero or non-finite measurements
pub(crate) fn validate_positive(field: &str, value: Option<f64>) -> AppResult<()> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(AppError::invalid_input(format!(
            "{field} must be a positive number"
        ))),
        _ => Ok(()),
    }
}

/// Convert a signed count into a non-negative one
pub(crate) fn non_negative_count(field: &str, value: i64) -> AppResult<u32> {
    u32::try_from(value)
        .map_err(|_| AppError::invalid_input(format!("{field} must be a non-negative integer")))
}
