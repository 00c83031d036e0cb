// ABOUTME: Progress entry database operations and the ProgressStore implementation
// ABOUTME: Listings are newest-first by date, then by creation time

use std::time::Instant;

use super::{elapsed_ms, parse_uuid, Database};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{NewProgressEntry, ProgressEntry, Subject};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use fittrack_intelligence::ProgressStore;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::{debug, info};
use uuid::Uuid;

const PROGRESS_COLUMNS: &str =
    "id, subject_id, date, weight_kg, workouts_completed, notes, created_at";

const NEWEST_FIRST: &str = "ORDER BY date DESC, created_at DESC, rowid DESC";

impl Database {
    /// Create the progress entries table
    pub(super) async fn migrate_progress(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS progress_entries (
                id TEXT PRIMARY KEY,
                subject_id TEXT NOT NULL REFERENCES subjects(id) ON DELETE CASCADE,
                date DATE NOT NULL,
                weight_kg REAL NOT NULL DEFAULT 0 CHECK (weight_kg >= 0),
                workouts_completed INTEGER NOT NULL DEFAULT 0 CHECK (workouts_completed >= 0),
                notes TEXT NOT NULL DEFAULT '',
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_progress_subject_date \
             ON progress_entries(subject_id, date)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Record a progress entry dated `date` for an existing subject
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the subject does not exist
    pub async fn create_progress_entry(
        &self,
        entry: &NewProgressEntry,
        date: NaiveDate,
    ) -> AppResult<ProgressEntry> {
        let started = Instant::now();

        if self.get_subject(entry.subject_id).await?.is_none() {
            return Err(AppError::not_found(format!("Subject {}", entry.subject_id)));
        }

        let stored = ProgressEntry {
            id: Uuid::new_v4(),
            subject_id: entry.subject_id,
            date,
            weight_kg: entry.weight_kg,
            workouts_completed: entry.workouts_completed,
            notes: entry.notes.clone(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r"
            INSERT INTO progress_entries
                (id, subject_id, date, weight_kg, workouts_completed, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(stored.id.to_string())
        .bind(stored.subject_id.to_string())
        .bind(stored.date)
        .bind(stored.weight_kg)
        .bind(stored.workouts_completed)
        .bind(&stored.notes)
        .bind(stored.created_at)
        .execute(&self.pool)
        .await?;

        info!(
            subject_id = %stored.subject_id,
            entry_id = %stored.id,
            date = %stored.date,
            "Recorded progress entry"
        );
        AppLogger::log_database_operation("insert", "progress_entries", true, elapsed_ms(started));
        Ok(stored)
    }

    /// The `limit` most recent entries for a subject, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn recent_progress_entries(
        &self,
        subject_id: Uuid,
        limit: u32,
    ) -> AppResult<Vec<ProgressEntry>> {
        debug!(subject_id = %subject_id, limit, "Loading recent progress");
        let rows = sqlx::query(&format!(
            "SELECT {PROGRESS_COLUMNS} FROM progress_entries WHERE subject_id = $1 \
             {NEWEST_FIRST} LIMIT $2"
        ))
        .bind(subject_id.to_string())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_entry).collect()
    }

    /// Every entry for a subject, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_progress_entries(&self, subject_id: Uuid) -> AppResult<Vec<ProgressEntry>> {
        debug!(subject_id = %subject_id, "Loading progress history");
        let rows = sqlx::query(&format!(
            "SELECT {PROGRESS_COLUMNS} FROM progress_entries WHERE subject_id = $1 {NEWEST_FIRST}"
        ))
        .bind(subject_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_entry).collect()
    }

    /// Entries dated on or after `since`, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn progress_entries_since(
        &self,
        subject_id: Uuid,
        since: NaiveDate,
    ) -> AppResult<Vec<ProgressEntry>> {
        debug!(subject_id = %subject_id, since = %since, "Loading progress window");
        let rows = sqlx::query(&format!(
            "SELECT {PROGRESS_COLUMNS} FROM progress_entries \
             WHERE subject_id = $1 AND date >= $2 {NEWEST_FIRST}"
        ))
        .bind(subject_id.to_string())
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_entry).collect()
    }
}

#[async_trait]
impl ProgressStore for Database {
    async fn get_subject(&self, subject_id: Uuid) -> AppResult<Option<Subject>> {
        Self::get_subject(self, subject_id).await
    }

    async fn recent_progress(&self, subject_id: Uuid, limit: u32) -> AppResult<Vec<ProgressEntry>> {
        self.recent_progress_entries(subject_id, limit).await
    }

    async fn all_progress(&self, subject_id: Uuid) -> AppResult<Vec<ProgressEntry>> {
        self.list_progress_entries(subject_id).await
    }

    async fn progress_since(
        &self,
        subject_id: Uuid,
        since: NaiveDate,
    ) -> AppResult<Vec<ProgressEntry>> {
        self.progress_entries_since(subject_id, since).await
    }
}

fn row_to_entry(row: &SqliteRow) -> AppResult<ProgressEntry> {
    let id: String = row.try_get("id")?;
    let subject_id: String = row.try_get("subject_id")?;
    Ok(ProgressEntry {
        id: parse_uuid(&id, "progress_entries.id")?,
        subject_id: parse_uuid(&subject_id, "progress_entries.subject_id")?,
        date: row.try_get("date")?,
        weight_kg: row.try_get("weight_kg")?,
        workouts_completed: row.try_get("workouts_completed")?,
        notes: row.try_get("notes")?,
        created_at: row.try_get("created_at")?,
    })
}
