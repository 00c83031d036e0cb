// ABOUTME: Metric calculators: calorie burn, macro split, weekly weight change, comparisons
// ABOUTME: Pure functions over numeric inputs with two-decimal display rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Metric calculators
//!
//! All results that are shown to a user are rounded to two decimals with
//! [`round2`]. None of the calculators touch the record store.

use std::collections::HashMap;

use fittrack_core::constants::calories::{KCAL_PER_MINUTE_AT_REFERENCE, REFERENCE_WEIGHT_KG};
use fittrack_core::constants::goals::WEIGHT_CHANGE_PERIODS;
use fittrack_core::constants::macros::{
    CARBS_KCAL_PER_G, DEFAULT_CARBS_RATIO, DEFAULT_FAT_RATIO, DEFAULT_PROTEIN_RATIO,
    FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G,
};
use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::{Workout, WorkoutSummary};
use serde::{Deserialize, Serialize};

/// Round to two decimal places
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Estimate calories burned for a session of `duration_minutes` by a subject
/// weighing `weight_kg`
///
/// `duration * (weight / 70) * 5`, rounded to two decimals. A weight of zero
/// yields zero.
///
/// # Errors
///
/// `InvalidInput` when the weight is negative or not finite.
pub fn calories_burned(duration_minutes: u32, weight_kg: f64) -> AppResult<f64> {
    if !weight_kg.is_finite() || weight_kg < 0.0 {
        return Err(AppError::invalid_input(
            "user_weight must be a non-negative number",
        ));
    }
    let estimate = f64::from(duration_minutes)
        * (weight_kg / REFERENCE_WEIGHT_KG)
        * KCAL_PER_MINUTE_AT_REFERENCE;
    Ok(round2(estimate))
}

/// Fractions of total calories assigned to each macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatio {
    /// Protein share
    pub protein: f64,
    /// Fat share
    pub fat: f64,
    /// Carbohydrate share
    pub carbs: f64,
}

impl Default for MacroRatio {
    fn default() -> Self {
        Self {
            protein: DEFAULT_PROTEIN_RATIO,
            fat: DEFAULT_FAT_RATIO,
            carbs: DEFAULT_CARBS_RATIO,
        }
    }
}

impl MacroRatio {
    /// Read the `protein`, `fat` and `carbs` keys from a ratio mapping
    ///
    /// The shares are not required to sum to one.
    ///
    /// # Errors
    ///
    /// `MissingField` naming the first absent key.
    pub fn from_map(ratio: &HashMap<String, f64>) -> AppResult<Self> {
        let share = |key: &str| {
            ratio
                .get(key)
                .copied()
                .ok_or_else(|| AppError::missing_field(format!("ratio.{key}")))
        };
        Ok(Self {
            protein: share("protein")?,
            fat: share("fat")?,
            carbs: share("carbs")?,
        })
    }
}

/// Grams of each macronutrient for a calorie target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein grams
    pub protein_g: f64,
    /// Fat grams
    pub fat_g: f64,
    /// Carbohydrate grams
    pub carbs_g: f64,
}

/// Split `calories` into grams of protein, fat and carbohydrate
#[must_use]
pub fn macro_split(calories: f64, ratio: &MacroRatio) -> MacroSplit {
    MacroSplit {
        protein_g: round2(calories * ratio.protein / PROTEIN_KCAL_PER_G),
        fat_g: round2(calories * ratio.fat / FAT_KCAL_PER_G),
        carbs_g: round2(calories * ratio.carbs / CARBS_KCAL_PER_G),
    }
}

/// Weekly weight change needed to move from `current_weight` to `goal_weight`
/// over a fixed ten-period plan
///
/// Negative means loss, positive means gain.
#[must_use]
pub fn weekly_weight_change(current_weight: f64, goal_weight: f64) -> f64 {
    round2((goal_weight - current_weight) / WEIGHT_CHANGE_PERIODS)
}

/// Side-by-side comparison of two workouts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutComparison {
    /// First workout
    pub workout1: WorkoutSummary,
    /// Second workout
    pub workout2: WorkoutSummary,
    /// `workout1` calories minus `workout2` calories
    pub calories_diff: f64,
    /// `workout1` duration minus `workout2` duration
    pub duration_diff: i64,
}

/// Compare two workouts; differences are signed `a - b`
#[must_use]
pub fn compare_workouts(a: &Workout, b: &Workout) -> WorkoutComparison {
    WorkoutComparison {
        workout1: a.summary(),
        workout2: b.summary(),
        calories_diff: a.calories_burned_estimate - b.calories_burned_estimate,
        duration_diff: i64::from(a.duration_minutes) - i64::from(b.duration_minutes),
    }
}
