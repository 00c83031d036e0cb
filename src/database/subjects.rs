// ABOUTME: Subject profile database operations
// ABOUTME: Create, read, update, and delete profiles; deleting cascades to progress entries

use std::time::Instant;

use super::{elapsed_ms, parse_uuid, Database};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::Subject;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::debug;
use uuid::Uuid;

const SUBJECT_COLUMNS: &str = "id, username, age, height_cm, weight_kg, created_at";

impl Database {
    /// Create the subjects table
    pub(super) async fn migrate_subjects(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS subjects (
                id TEXT PRIMARY KEY,
                username TEXT UNIQUE NOT NULL,
                age INTEGER CHECK (age IS NULL OR age >= 0),
                height_cm REAL CHECK (height_cm IS NULL OR height_cm > 0),
                weight_kg REAL CHECK (weight_kg IS NULL OR weight_kg > 0),
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a new subject
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if the username is taken
    pub async fn create_subject(&self, subject: &Subject) -> AppResult<()> {
        let started = Instant::now();

        if self.get_subject_by_username(&subject.username).await?.is_some() {
            return Err(AppError::already_exists(format!(
                "Subject with username '{}'",
                subject.username
            )));
        }

        sqlx::query(
            r"
            INSERT INTO subjects (id, username, age, height_cm, weight_kg, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(subject.id.to_string())
        .bind(&subject.username)
        .bind(subject.age)
        .bind(subject.height_cm)
        .bind(subject.weight_kg)
        .bind(subject.created_at)
        .execute(&self.pool)
        .await?;

        AppLogger::log_database_operation("insert", "subjects", true, elapsed_ms(started));
        Ok(())
    }

    /// Look up a subject by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_subject(&self, subject_id: Uuid) -> AppResult<Option<Subject>> {
        debug!(subject_id = %subject_id, "Loading subject");
        let row = sqlx::query(&format!(
            "SELECT {SUBJECT_COLUMNS} FROM subjects WHERE id = $1"
        ))
        .bind(subject_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_subject(&r)).transpose()
    }

    /// Look up a subject by username
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_subject_by_username(&self, username: &str) -> AppResult<Option<Subject>> {
        let row = sqlx::query(&format!(
            "SELECT {SUBJECT_COLUMNS} FROM subjects WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_subject(&r)).transpose()
    }

    /// List all subjects, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_subjects(&self) -> AppResult<Vec<Subject>> {
        let rows = sqlx::query(&format!(
            "SELECT {SUBJECT_COLUMNS} FROM subjects ORDER BY created_at ASC, rowid ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_subject).collect()
    }

    /// Persist the mutable fields of an existing subject
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no subject has this id and
    /// `ResourceAlreadyExists` if the new username belongs to someone else
    pub async fn update_subject(&self, subject: &Subject) -> AppResult<()> {
        if let Some(existing) = self.get_subject_by_username(&subject.username).await? {
            if existing.id != subject.id {
                return Err(AppError::already_exists(format!(
                    "Subject with username '{}'",
                    subject.username
                )));
            }
        }

        let result = sqlx::query(
            r"
            UPDATE subjects
            SET username = $2, age = $3, height_cm = $4, weight_kg = $5
            WHERE id = $1
            ",
        )
        .bind(subject.id.to_string())
        .bind(&subject.username)
        .bind(subject.age)
        .bind(subject.height_cm)
        .bind(subject.weight_kg)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Subject {}", subject.id)));
        }
        Ok(())
    }

    /// Delete a subject and, through the foreign key, its progress entries
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no subject has this id
    pub async fn delete_subject(&self, subject_id: Uuid) -> AppResult<()> {
        let started = Instant::now();
        let result = sqlx::query("DELETE FROM subjects WHERE id = $1")
            .bind(subject_id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Subject {subject_id}")));
        }
        AppLogger::log_database_operation("delete", "subjects", true, elapsed_ms(started));
        Ok(())
    }
}

fn row_to_subject(row: &SqliteRow) -> AppResult<Subject> {
    let id: String = row.try_get("id")?;
    Ok(Subject {
        id: parse_uuid(&id, "subjects.id")?,
        username: row.try_get("username")?,
        age: row.try_get("age")?,
        height_cm: row.try_get("height_cm")?,
        weight_kg: row.try_get("weight_kg")?,
        created_at: row.try_get("created_at")?,
    })
}
