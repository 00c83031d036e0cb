// ABOUTME: Progress entry model: one dated weight and activity record per subject
// ABOUTME: Entries are created by the record-progress action and never updated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::non_negative_count;
use crate::errors::{AppError, AppResult};

/// One dated measurement/activity record for a subject
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressEntry {
    /// Unique identifier
    pub id: Uuid,
    /// Owning subject
    pub subject_id: Uuid,
    /// Calendar date assigned at creation
    pub date: NaiveDate,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Workouts completed that day
    pub workouts_completed: u32,
    /// Free-text notes
    pub notes: String,
    /// Creation timestamp, used to order entries sharing a date
    pub created_at: DateTime<Utc>,
}

/// Body of the record-progress action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordProgressRequest {
    /// Subject the entry belongs to
    #[serde(default, alias = "user_id")]
    pub subject_id: Option<Uuid>,
    /// Body weight in kilograms (defaults to 0)
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Workouts completed (defaults to 0)
    #[serde(default)]
    pub workouts_completed: Option<i64>,
    /// Free-text notes (defaults to empty)
    #[serde(default)]
    pub notes: Option<String>,
}

/// A validated progress entry ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewProgressEntry {
    /// Owning subject
    pub subject_id: Uuid,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Workouts completed
    pub workouts_completed: u32,
    /// Free-text notes
    pub notes: String,
}

impl TryFrom<RecordProgressRequest> for NewProgressEntry {
    type Error = AppError;

    fn try_from(request: RecordProgressRequest) -> AppResult<Self> {
        let subject_id = request
            .subject_id
            .ok_or_else(|| AppError::missing_field("subject_id"))?;

        let weight_kg = request.weight_kg.unwrap_or(0.0);
        if !weight_kg.is_finite() || weight_kg < 0.0 {
            return Err(AppError::invalid_input(
                "weight_kg must be a non-negative number",
            ));
        }

        let workouts_completed =
            non_negative_count("workouts_completed", request.workouts_completed.unwrap_or(0))?;

        Ok(Self {
            subject_id,
            weight_kg,
            workouts_completed,
            notes: request.notes.unwrap_or_default(),
        })
    }
}
