// ABOUTME: Progress business logic: recording dated entries and listing history
// ABOUTME: Entry dates come from the caller so recording stays deterministic under test
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use chrono::{NaiveDate, Utc};

use crate::database::Database;
use crate::errors::AppResult;
use crate::models::{NewProgressEntry, ProgressEntry, RecordProgressRequest};
use fittrack_intelligence::store::require_subject;
use uuid::Uuid;

/// Today's calendar date in UTC
#[must_use]
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Validate and store a progress entry dated `date`
///
/// # Errors
///
/// `MissingField` without a subject id, `InvalidInput` for negative values,
/// `NotFound` for an unknown subject.
pub async fn record_progress(
    database: &Database,
    request: RecordProgressRequest,
    date: NaiveDate,
) -> AppResult<ProgressEntry> {
    let entry = NewProgressEntry::try_from(request)?;
    database.create_progress_entry(&entry, date).await
}

/// A subject's full history, newest first
///
/// # Errors
///
/// `NotFound` for an unknown subject.
pub async fn exercise_progress(
    database: &Database,
    subject_id: Uuid,
) -> AppResult<Vec<ProgressEntry>> {
    require_subject(database, subject_id).await?;
    database.list_progress_entries(subject_id).await
}
