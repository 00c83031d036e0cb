// ABOUTME: Report aggregator folding a subject's full progress history into a summary
// ABOUTME: Totals completed workouts and reports the latest known weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use fittrack_core::errors::AppResult;
use fittrack_core::models::{ProgressEntry, Subject};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::{require_subject, ProgressStore};

/// Encouragement attached to every report
pub const REPORT_MESSAGE: &str = "Keep up the good work!";

/// Summary of a subject's progress history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessReport {
    /// Subject username
    pub username: String,
    /// Sum of workouts completed across every entry
    pub total_workouts_completed: u64,
    /// Weight of the newest entry, else the profile weight
    pub current_weight: Option<f64>,
    /// Encouragement message
    pub message: String,
}

impl FitnessReport {
    /// Fold `history` (any order) into a report for `subject`
    #[must_use]
    pub fn from_history(subject: &Subject, history: &[ProgressEntry]) -> Self {
        let total_workouts_completed = history
            .iter()
            .map(|entry| u64::from(entry.workouts_completed))
            .sum();

        let current_weight = history
            .iter()
            .max_by_key(|entry| (entry.date, entry.created_at))
            .map_or(subject.weight_kg, |latest| Some(latest.weight_kg));

        Self {
            username: subject.username.clone(),
            total_workouts_completed,
            current_weight,
            message: REPORT_MESSAGE.to_owned(),
        }
    }
}

/// Builds fitness reports from stored history
pub struct ReportAggregator;

impl ReportAggregator {
    /// Generate the report for one subject
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown subject; store failures propagate.
    pub async fn generate<S>(store: &S, subject_id: Uuid) -> AppResult<FitnessReport>
    where
        S: ProgressStore + ?Sized,
    {
        let subject = require_subject(store, subject_id).await?;
        let history = store.all_progress(subject_id).await?;
        Ok(FitnessReport::from_history(&subject, &history))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;
    use fittrack_core::errors::ErrorCode;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    #[tokio::test]
    async fn test_report_sums_all_entries() {
        let (mut store, id) = InMemoryStore::with_subject(Some(82.0));
        store.push(id, today(), 10, 81.0, 2);
        store.push(id, today(), 0, 79.5, 1);
        store.push(id, today(), 5, 80.2, 3);

        let report = ReportAggregator::generate(&store, id).await.unwrap();
        assert_eq!(report.username, "tester");
        assert_eq!(report.total_workouts_completed, 6);
        assert_eq!(report.current_weight, Some(79.5));
        assert_eq!(report.message, REPORT_MESSAGE);
    }

    #[tokio::test]
    async fn test_report_falls_back_to_profile_weight() {
        let (store, id) = InMemoryStore::with_subject(Some(82.0));

        let report = ReportAggregator::generate(&store, id).await.unwrap();
        assert_eq!(report.total_workouts_completed, 0);
        assert_eq!(report.current_weight, Some(82.0));
    }

    #[tokio::test]
    async fn test_same_day_entries_prefer_latest_created() {
        let (mut store, id) = InMemoryStore::with_subject(None);
        store.push(id, today(), 0, 75.0, 1);
        store.push(id, today(), 0, 74.0, 1);

        let report = ReportAggregator::generate(&store, id).await.unwrap();
        assert_eq!(report.current_weight, Some(74.0));
    }

    #[tokio::test]
    async fn test_unknown_subject() {
        let store = InMemoryStore::default();
        let err = ReportAggregator::generate(&store, Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
    }
}
