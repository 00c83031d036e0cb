// ABOUTME: Goal projector estimating when a subject reaches a target weight
// ABOUTME: Assumes a fixed half-kilogram change per week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use chrono::{Duration, NaiveDate};
use fittrack_core::constants::goals::WEEKLY_RATE_KG;
use fittrack_core::constants::units::DAYS_PER_WEEK;
use fittrack_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::{require_subject, ProgressStore};

/// Projected completion of a weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProjection {
    /// Weeks to goal, rounded to the nearest whole week
    pub estimated_weeks_to_goal: i64,
    /// Projected date the goal is reached
    pub estimated_date: NaiveDate,
}

/// Projects goal dates from a current and a target weight
pub struct GoalProjector;

impl GoalProjector {
    /// Project the date `target` is reached from `current`
    ///
    /// The displayed week count is rounded (ties to even); the date uses the
    /// unrounded week count, truncated to whole days. A missing or
    /// non-positive weight on either side cannot be projected.
    ///
    /// # Errors
    ///
    /// `InsufficientData` when either weight is unset, `InvalidInput` when
    /// the projected date overflows the calendar.
    pub fn project(
        current: Option<f64>,
        target: Option<f64>,
        today: NaiveDate,
    ) -> AppResult<GoalProjection> {
        let (Some(current), Some(target)) = (usable(current), usable(target)) else {
            return Err(AppError::insufficient_data(
                "Unable to predict goal: current and target weight are both required",
            ));
        };

        let weeks_needed = (current - target).abs() / WEEKLY_RATE_KG;
        let days = (weeks_needed * DAYS_PER_WEEK).floor() as i64;
        let estimated_date = Duration::try_days(days)
            .and_then(|offset| today.checked_add_signed(offset))
            .ok_or_else(|| AppError::invalid_input("Projected goal date is out of range"))?;

        Ok(GoalProjection {
            estimated_weeks_to_goal: weeks_needed.round_ties_even() as i64,
            estimated_date,
        })
    }

    /// Project for a stored subject using its profile weight
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown subject, otherwise as [`Self::project`].
    pub async fn project_for_subject<S>(
        store: &S,
        subject_id: Uuid,
        target: f64,
        today: NaiveDate,
    ) -> AppResult<GoalProjection>
    where
        S: ProgressStore + ?Sized,
    {
        let subject = require_subject(store, subject_id).await?;
        Self::project(subject.weight_kg, Some(target), today)
    }
}

fn usable(weight: Option<f64>) -> Option<f64> {
    weight.filter(|w| w.is_finite() && *w > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use fittrack_core::errors::ErrorCode;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
    }

    #[test]
    fn test_ten_weeks_for_five_kilos() {
        let projection = GoalProjector::project(Some(70.0), Some(65.0), today()).unwrap();
        assert_eq!(projection.estimated_weeks_to_goal, 10);
        assert_eq!(projection.estimated_date, today() + Duration::weeks(10));
    }

    #[test]
    fn test_gain_goal_uses_absolute_difference() {
        let projection = GoalProjector::project(Some(60.0), Some(62.0), today()).unwrap();
        assert_eq!(projection.estimated_weeks_to_goal, 4);
        assert_eq!(projection.estimated_date, today() + Duration::days(28));
    }

    #[test]
    fn test_fractional_weeks_drive_the_date() {
        // 0.3 kg -> 0.6 weeks -> 4.2 days, displayed as 1 week
        let projection = GoalProjector::project(Some(70.0), Some(69.7), today()).unwrap();
        assert_eq!(projection.estimated_weeks_to_goal, 1);
        assert_eq!(projection.estimated_date, today() + Duration::days(4));
    }

    #[test]
    fn test_missing_weight_is_insufficient_data() {
        let err = GoalProjector::project(None, Some(65.0), today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientData);

        let err = GoalProjector::project(Some(70.0), Some(0.0), today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientData);
    }

    #[tokio::test]
    async fn test_subject_without_weight_cannot_project() {
        let (store, id) = InMemoryStore::with_subject(None);
        let err = GoalProjector::project_for_subject(&store, id, 65.0, today())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientData);
    }

    #[tokio::test]
    async fn test_subject_projection_uses_profile_weight() {
        let (store, id) = InMemoryStore::with_subject(Some(80.0));
        let projection = GoalProjector::project_for_subject(&store, id, 75.0, today())
            .await
            .unwrap();
        assert_eq!(projection.estimated_weeks_to_goal, 10);
    }
}
