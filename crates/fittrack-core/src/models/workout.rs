// ABOUTME: Workout definition model with duration, calorie estimate, and difficulty tier
// ABOUTME: Includes the summary view used by workout comparisons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{validate_name, MAX_NAME_LEN};
use crate::errors::{AppError, AppResult};

/// Difficulty tier of a workout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Suitable for newcomers
    Beginner,
    /// Requires some training base
    Intermediate,
    /// Demanding sessions
    Advanced,
}

impl Difficulty {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(AppError::invalid_input(format!(
                "Unknown difficulty: {other}"
            ))),
        }
    }
}

/// A workout definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Duration in minutes (always positive)
    pub duration_minutes: u32,
    /// Estimated calorie burn (non-negative)
    pub calories_burned_estimate: f64,
    /// Optional difficulty tier
    pub difficulty: Option<Difficulty>,
    /// When the workout was created
    pub created_at: DateTime<Utc>,
}

/// Body for creating or replacing a workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRequest {
    /// Display name
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Estimated calorie burn
    pub calories_burned_estimate: f64,
    /// Optional difficulty tier
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

impl WorkoutRequest {
    /// Validate duration and calorie invariants
    pub fn validate(&self) -> AppResult<()> {
        validate_name("name", &self.name, MAX_NAME_LEN)?;
        if self.duration_minutes == 0 {
            return Err(AppError::invalid_input(
                "duration_minutes must be a positive integer",
            ));
        }
        if !self.calories_burned_estimate.is_finite() || self.calories_burned_estimate < 0.0 {
            return Err(AppError::invalid_input(
                "calories_burned_estimate must be a non-negative number",
            ));
        }
        Ok(())
    }
}

impl Workout {
    /// Build a new workout from a validated request
    pub fn from_request(request: WorkoutRequest) -> AppResult<Self> {
        request.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: request.name.trim().to_owned(),
            description: request.description,
            duration_minutes: request.duration_minutes,
            calories_burned_estimate: request.calories_burned_estimate,
            difficulty: request.difficulty,
            created_at: Utc::now(),
        })
    }

    /// Replace the mutable fields from a validated request
    pub fn apply(&mut self, request: WorkoutRequest) -> AppResult<()> {
        request.validate()?;
        self.name = request.name.trim().to_owned();
        self.description = request.description;
        self.duration_minutes = request.duration_minutes;
        self.calories_burned_estimate = request.calories_burned_estimate;
        self.difficulty = request.difficulty;
        Ok(())
    }

    /// Compact view used in comparisons
    #[must_use]
    pub fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            id: self.id,
            name: self.name.clone(),
            calories_burned_estimate: self.calories_burned_estimate,
            duration_minutes: self.duration_minutes,
        }
    }
}

/// The fields of a workout that comparisons report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSummary {
    /// Workout identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Estimated calorie burn
    pub calories_burned_estimate: f64,
    /// Duration in minutes
    pub duration_minutes: u32,
}
