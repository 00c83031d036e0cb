// ABOUTME: Trend and recommendation engine over a subject's recent progress window
// ABOUTME: Derives rest-day suggestions, weight direction, and missed-workout alerts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Trend & recommendation engine
//!
//! Each signal reads a small, fixed window of the newest entries. The window
//! logic lives in pure functions so the boundary rules can be tested without
//! a store; [`TrendEngine`] adds the subject lookup and the store query.

use chrono::{Duration, NaiveDate};
use fittrack_core::constants::goals::{
    MISSING_WORKOUT_LOOKBACK_DAYS, REST_DAY_WINDOW, TREND_WINDOW,
};
use fittrack_core::errors::AppResult;
use fittrack_core::models::ProgressEntry;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::store::{require_subject, ProgressStore};

/// Direction of a subject's weight between the two newest entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressTrend {
    /// Fewer than two entries exist
    #[serde(rename = "Insufficient data")]
    InsufficientData,
    /// Newest weight strictly below the previous one
    #[serde(rename = "Weight decreasing")]
    Decreasing,
    /// Newest weight equal to or above the previous one
    #[serde(rename = "Weight stable or increasing")]
    StableOrIncreasing,
}

impl ProgressTrend {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InsufficientData => "Insufficient data",
            Self::Decreasing => "Weight decreasing",
            Self::StableOrIncreasing => "Weight stable or increasing",
        }
    }
}

/// Rest-day recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestDaySuggestion {
    /// Number of rest days recommended (0 or 1)
    pub rest_days_recommended: u32,
}

/// Missed-workout alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingWorkoutAlert {
    /// True when nothing was logged inside the lookback window
    pub alert: bool,
    /// Message shown to the subject
    pub message: String,
}

impl MissingWorkoutAlert {
    fn new(alert: bool) -> Self {
        let message = if alert {
            "You've missed workouts recently!"
        } else {
            "No missing workouts."
        };
        Self {
            alert,
            message: message.to_owned(),
        }
    }
}

/// Rest days for a newest-first window
///
/// A window shorter than [`REST_DAY_WINDOW`] means no rest is needed.
#[must_use]
pub fn rest_days_for_window(window: &[ProgressEntry]) -> u32 {
    if window.len() < REST_DAY_WINDOW as usize {
        return 0;
    }
    let all_active = window
        .iter()
        .take(REST_DAY_WINDOW as usize)
        .all(|entry| entry.workouts_completed > 0);
    u32::from(all_active)
}

/// Weight direction for a newest-first window
#[must_use]
pub fn trend_for_window(window: &[ProgressEntry]) -> ProgressTrend {
    match window {
        [latest, previous, ..] if latest.weight_kg < previous.weight_kg => ProgressTrend::Decreasing,
        [_, _, ..] => ProgressTrend::StableOrIncreasing,
        _ => ProgressTrend::InsufficientData,
    }
}

/// First date inside the missing-workout lookback window
#[must_use]
pub fn missing_workout_cutoff(today: NaiveDate) -> NaiveDate {
    today - Duration::days(MISSING_WORKOUT_LOOKBACK_DAYS)
}

/// True when no entry falls on or after the lookback cutoff
#[must_use]
pub fn has_missed_workouts(entries: &[ProgressEntry], today: NaiveDate) -> bool {
    let cutoff = missing_workout_cutoff(today);
    !entries.iter().any(|entry| entry.date >= cutoff)
}

/// Store-backed trend signals for one subject at a time
pub struct TrendEngine<'a, S: ProgressStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: ProgressStore + ?Sized> TrendEngine<'a, S> {
    /// Create an engine reading from `store`
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Suggest a rest day after three consecutive active entries
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown subject; store failures propagate.
    pub async fn suggest_rest_days(&self, subject_id: Uuid) -> AppResult<RestDaySuggestion> {
        require_subject(self.store, subject_id).await?;
        let window = self
            .store
            .recent_progress(subject_id, REST_DAY_WINDOW)
            .await?;
        let rest_days_recommended = rest_days_for_window(&window);
        debug!(%subject_id, window = window.len(), rest_days_recommended, "Rest day suggestion");
        Ok(RestDaySuggestion {
            rest_days_recommended,
        })
    }

    /// Compare the two newest weights
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown subject; store failures propagate.
    pub async fn progress_trend(&self, subject_id: Uuid) -> AppResult<ProgressTrend> {
        require_subject(self.store, subject_id).await?;
        let window = self.store.recent_progress(subject_id, TREND_WINDOW).await?;
        let trend = trend_for_window(&window);
        debug!(%subject_id, trend = trend.label(), "Progress trend");
        Ok(trend)
    }

    /// Alert when nothing was logged in the last three days (inclusive)
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown subject; store failures propagate.
    pub async fn missing_workout_alert(
        &self,
        subject_id: Uuid,
        today: NaiveDate,
    ) -> AppResult<MissingWorkoutAlert> {
        require_subject(self.store, subject_id).await?;
        let recent = self
            .store
            .progress_since(subject_id, missing_workout_cutoff(today))
            .await?;
        Ok(MissingWorkoutAlert::new(has_missed_workouts(&recent, today)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use fittrack_core::errors::ErrorCode;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[tokio::test]
    async fn test_rest_day_after_three_active_entries() {
        let (mut store, id) = InMemoryStore::with_subject(Some(70.0));
        for days_ago in 0..3 {
            store.push(id, today(), days_ago, 70.0, 1);
        }

        let suggestion = TrendEngine::new(&store).suggest_rest_days(id).await.unwrap();
        assert_eq!(suggestion.rest_days_recommended, 1);
    }

    #[tokio::test]
    async fn test_no_rest_day_when_one_entry_idle() {
        let (mut store, id) = InMemoryStore::with_subject(Some(70.0));
        store.push(id, today(), 0, 70.0, 2);
        store.push(id, today(), 1, 70.0, 0);
        store.push(id, today(), 2, 70.0, 1);

        let suggestion = TrendEngine::new(&store).suggest_rest_days(id).await.unwrap();
        assert_eq!(suggestion.rest_days_recommended, 0);
    }

    #[tokio::test]
    async fn test_no_rest_day_with_short_history() {
        let (mut store, id) = InMemoryStore::with_subject(Some(70.0));
        store.push(id, today(), 0, 70.0, 3);
        store.push(id, today(), 1, 70.0, 3);

        let suggestion = TrendEngine::new(&store).suggest_rest_days(id).await.unwrap();
        assert_eq!(suggestion.rest_days_recommended, 0);
    }

    #[tokio::test]
    async fn test_rest_day_only_looks_at_newest_three() {
        let (mut store, id) = InMemoryStore::with_subject(Some(70.0));
        store.push(id, today(), 0, 70.0, 1);
        store.push(id, today(), 1, 70.0, 1);
        store.push(id, today(), 2, 70.0, 1);
        store.push(id, today(), 3, 70.0, 0);

        let suggestion = TrendEngine::new(&store).suggest_rest_days(id).await.unwrap();
        assert_eq!(suggestion.rest_days_recommended, 1);
    }

    #[tokio::test]
    async fn test_trend_insufficient_with_one_entry() {
        let (mut store, id) = InMemoryStore::with_subject(Some(70.0));
        store.push(id, today(), 0, 70.0, 1);

        let trend = TrendEngine::new(&store).progress_trend(id).await.unwrap();
        assert_eq!(trend, ProgressTrend::InsufficientData);
    }

    #[tokio::test]
    async fn test_trend_decreasing_and_increasing() {
        let (mut store, id) = InMemoryStore::with_subject(Some(70.0));
        store.push(id, today(), 1, 70.0, 1);
        store.push(id, today(), 0, 68.0, 1);
        assert_eq!(
            TrendEngine::new(&store).progress_trend(id).await.unwrap(),
            ProgressTrend::Decreasing
        );

        let (mut store, id) = InMemoryStore::with_subject(Some(70.0));
        store.push(id, today(), 1, 70.0, 1);
        store.push(id, today(), 0, 71.0, 1);
        assert_eq!(
            TrendEngine::new(&store).progress_trend(id).await.unwrap(),
            ProgressTrend::StableOrIncreasing
        );
    }

    #[test]
    fn test_equal_weights_are_stable() {
        let (mut store, id) = InMemoryStore::with_subject(None);
        store.push(id, today(), 1, 70.0, 1);
        store.push(id, today(), 0, 70.0, 1);
        let mut window = store.entries.clone();
        window.reverse();
        assert_eq!(trend_for_window(&window), ProgressTrend::StableOrIncreasing);
    }

    #[tokio::test]
    async fn test_alert_when_no_recent_entries() {
        let (mut store, id) = InMemoryStore::with_subject(Some(70.0));
        store.push(id, today(), 4, 70.0, 1);

        let alert = TrendEngine::new(&store)
            .missing_workout_alert(id, today())
            .await
            .unwrap();
        assert!(alert.alert);
        assert_eq!(alert.message, "You've missed workouts recently!");
    }

    #[tokio::test]
    async fn test_entry_exactly_three_days_ago_clears_alert() {
        let (mut store, id) = InMemoryStore::with_subject(Some(70.0));
        store.push(id, today(), 3, 70.0, 0);

        let alert = TrendEngine::new(&store)
            .missing_workout_alert(id, today())
            .await
            .unwrap();
        assert!(!alert.alert);
        assert_eq!(alert.message, "No missing workouts.");
    }

    #[tokio::test]
    async fn test_unknown_subject_is_not_found() {
        let store = InMemoryStore::default();
        let err = TrendEngine::new(&store)
            .progress_trend(Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
    }

    #[test]
    fn test_trend_serializes_as_label() {
        let json = serde_json::to_value(ProgressTrend::Decreasing).unwrap();
        assert_eq!(json, serde_json::json!("Weight decreasing"));
    }
}
