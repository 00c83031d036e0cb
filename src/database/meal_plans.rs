// ABOUTME: Meal plan database operations
// ABOUTME: CRUD plus case-insensitive name filtering used by meal plan suggestions

use super::{parse_uuid, Database};
use crate::errors::{AppError, AppResult};
use crate::models::MealPlan;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

const MEAL_PLAN_COLUMNS: &str = "id, plan_name, description, calories, created_at";

impl Database {
    /// Create the meal plans table
    pub(super) async fn migrate_meal_plans(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS meal_plans (
                id TEXT PRIMARY KEY,
                plan_name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                calories INTEGER NOT NULL CHECK (calories >= 0),
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a new meal plan
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_meal_plan(&self, plan: &MealPlan) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO meal_plans (id, plan_name, description, calories, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(plan.id.to_string())
        .bind(&plan.plan_name)
        .bind(&plan.description)
        .bind(plan.calories)
        .bind(plan.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Look up a meal plan by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_meal_plan(&self, plan_id: Uuid) -> AppResult<Option<MealPlan>> {
        let row = sqlx::query(&format!(
            "SELECT {MEAL_PLAN_COLUMNS} FROM meal_plans WHERE id = $1"
        ))
        .bind(plan_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_meal_plan(&r)).transpose()
    }

    /// List meal plans, optionally keeping only names that contain `name_contains`
    /// (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_meal_plans(&self, name_contains: Option<&str>) -> AppResult<Vec<MealPlan>> {
        let rows = match name_contains {
            Some(needle) => {
                sqlx::query(&format!(
                    "SELECT {MEAL_PLAN_COLUMNS} FROM meal_plans \
                     WHERE instr(lower(plan_name), lower($1)) > 0 \
                     ORDER BY created_at ASC, rowid ASC"
                ))
                .bind(needle)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(&format!(
                    "SELECT {MEAL_PLAN_COLUMNS} FROM meal_plans ORDER BY created_at ASC, rowid ASC"
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.iter().map(row_to_meal_plan).collect()
    }

    /// Persist the mutable fields of an existing meal plan
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no meal plan has this id
    pub async fn update_meal_plan(&self, plan: &MealPlan) -> AppResult<()> {
        let result = sqlx::query(
            r"
            UPDATE meal_plans SET plan_name = $2, description = $3, calories = $4
            WHERE id = $1
            ",
        )
        .bind(plan.id.to_string())
        .bind(&plan.plan_name)
        .bind(&plan.description)
        .bind(plan.calories)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Meal plan {}", plan.id)));
        }
        Ok(())
    }

    /// Delete a meal plan
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no meal plan has this id
    pub async fn delete_meal_plan(&self, plan_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM meal_plans WHERE id = $1")
            .bind(plan_id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Meal plan {plan_id}")));
        }
        Ok(())
    }
}

fn row_to_meal_plan(row: &SqliteRow) -> AppResult<MealPlan> {
    let id: String = row.try_get("id")?;
    Ok(MealPlan {
        id: parse_uuid(&id, "meal_plans.id")?,
        plan_name: row.try_get("plan_name")?,
        description: row.try_get("description")?,
        calories: row.try_get("calories")?,
        created_at: row.try_get("created_at")?,
    })
}
