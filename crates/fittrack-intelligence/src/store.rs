// ABOUTME: Progress log query capability consumed by the trend and report components
// ABOUTME: Implemented by the SQLite record store and by an in-memory store in tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use async_trait::async_trait;
use chrono::NaiveDate;
use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::{ProgressEntry, Subject};
use uuid::Uuid;

/// Read access to subjects and their progress history
///
/// Every listing returns entries newest-first: by `date` descending, then by
/// `created_at` descending.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Look up a subject by id
    async fn get_subject(&self, subject_id: Uuid) -> AppResult<Option<Subject>>;

    /// The `limit` most recent entries for a subject
    async fn recent_progress(&self, subject_id: Uuid, limit: u32)
        -> AppResult<Vec<ProgressEntry>>;

    /// Every entry for a subject
    async fn all_progress(&self, subject_id: Uuid) -> AppResult<Vec<ProgressEntry>>;

    /// Entries dated on or after `since`
    async fn progress_since(
        &self,
        subject_id: Uuid,
        since: NaiveDate,
    ) -> AppResult<Vec<ProgressEntry>>;
}

/// Fetch a subject or fail with `NotFound`
pub async fn require_subject<S>(store: &S, subject_id: Uuid) -> AppResult<Subject>
where
    S: ProgressStore + ?Sized,
{
    store
        .get_subject(subject_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Subject {subject_id}")))
}
