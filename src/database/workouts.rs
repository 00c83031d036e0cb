// ABOUTME: Workout definition database operations
// ABOUTME: CRUD plus difficulty-filtered listing used by recommendations

use std::time::Instant;

use super::{elapsed_ms, parse_uuid, Database};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{Difficulty, Workout};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

const WORKOUT_COLUMNS: &str =
    "id, name, description, duration_minutes, calories_burned_estimate, difficulty, created_at";

impl Database {
    /// Create the workouts table
    pub(super) async fn migrate_workouts(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                duration_minutes INTEGER NOT NULL CHECK (duration_minutes > 0),
                calories_burned_estimate REAL NOT NULL CHECK (calories_burned_estimate >= 0),
                difficulty TEXT CHECK (difficulty IN ('beginner', 'intermediate', 'advanced')),
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_workouts_difficulty ON workouts(difficulty)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a new workout
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_workout(&self, workout: &Workout) -> AppResult<()> {
        let started = Instant::now();
        sqlx::query(
            r"
            INSERT INTO workouts
                (id, name, description, duration_minutes, calories_burned_estimate, difficulty, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(workout.id.to_string())
        .bind(&workout.name)
        .bind(&workout.description)
        .bind(workout.duration_minutes)
        .bind(workout.calories_burned_estimate)
        .bind(workout.difficulty.map(|d| d.as_str()))
        .bind(workout.created_at)
        .execute(&self.pool)
        .await?;

        AppLogger::log_database_operation("insert", "workouts", true, elapsed_ms(started));
        Ok(())
    }

    /// Look up a workout by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_workout(&self, workout_id: Uuid) -> AppResult<Option<Workout>> {
        let row = sqlx::query(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts WHERE id = $1"
        ))
        .bind(workout_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_workout(&r)).transpose()
    }

    /// List workouts, optionally restricted to one difficulty
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_workouts(&self, difficulty: Option<Difficulty>) -> AppResult<Vec<Workout>> {
        let rows = match difficulty {
            Some(difficulty) => {
                sqlx::query(&format!(
                    "SELECT {WORKOUT_COLUMNS} FROM workouts WHERE difficulty = $1 \
                     ORDER BY created_at ASC, rowid ASC"
                ))
                .bind(difficulty.as_str())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(&format!(
                    "SELECT {WORKOUT_COLUMNS} FROM workouts ORDER BY created_at ASC, rowid ASC"
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.iter().map(row_to_workout).collect()
    }

    /// Persist the mutable fields of an existing workout
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no workout has this id
    pub async fn update_workout(&self, workout: &Workout) -> AppResult<()> {
        let result = sqlx::query(
            r"
            UPDATE workouts
            SET name = $2, description = $3, duration_minutes = $4,
                calories_burned_estimate = $5, difficulty = $6
            WHERE id = $1
            ",
        )
        .bind(workout.id.to_string())
        .bind(&workout.name)
        .bind(&workout.description)
        .bind(workout.duration_minutes)
        .bind(workout.calories_burned_estimate)
        .bind(workout.difficulty.map(|d| d.as_str()))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Workout {}", workout.id)));
        }
        Ok(())
    }

    /// Delete a workout
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no workout has this id
    pub async fn delete_workout(&self, workout_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(workout_id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Workout {workout_id}")));
        }
        Ok(())
    }
}

fn row_to_workout(row: &SqliteRow) -> AppResult<Workout> {
    let id: String = row.try_get("id")?;
    let difficulty: Option<String> = row.try_get("difficulty")?;
    Ok(Workout {
        id: parse_uuid(&id, "workouts.id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        duration_minutes: row.try_get("duration_minutes")?,
        calories_burned_estimate: row.try_get("calories_burned_estimate")?,
        difficulty: difficulty.as_deref().map(str::parse::<Difficulty>).transpose()?,
        created_at: row.try_get("created_at")?,
    })
}
