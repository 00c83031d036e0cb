// ABOUTME: Nutrition helpers: daily calorie targets, hydration check, snacks, supplements
// ABOUTME: Static lookups and thresholds with no store access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use fittrack_core::constants::calories::{BASE_DAILY_CALORIES, GOAL_ADJUSTMENT};
use fittrack_core::constants::goals::MIN_DAILY_WATER_LITERS;
use fittrack_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Healthy snack suggestions
pub const HEALTHY_SNACKS: [&str; 4] = [
    "Apple slices with peanut butter",
    "Greek yogurt with berries",
    "Carrot sticks with hummus",
    "Nuts and seeds mix",
];

/// Body-weight goal used to adjust the daily calorie target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalorieGoal {
    /// Caloric deficit
    LoseWeight,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    GainWeight,
}

impl CalorieGoal {
    /// Parse a goal, treating anything unrecognized as maintenance
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "lose_weight" => Self::LoseWeight,
            "gain_weight" => Self::GainWeight,
            _ => Self::Maintain,
        }
    }
}

/// Recommended daily calories for a goal
#[must_use]
pub const fn recommend_daily_calories(goal: CalorieGoal) -> i64 {
    match goal {
        CalorieGoal::LoseWeight => BASE_DAILY_CALORIES - GOAL_ADJUSTMENT,
        CalorieGoal::Maintain => BASE_DAILY_CALORIES,
        CalorieGoal::GainWeight => BASE_DAILY_CALORIES + GOAL_ADJUSTMENT,
    }
}

/// Outcome of a hydration check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydrationCheck {
    /// Whether intake met the daily threshold
    pub hydration_ok: bool,
    /// Feedback message
    pub message: String,
}

/// Compare daily water intake with the two-liter threshold
///
/// # Errors
///
/// `InvalidInput` for negative or non-finite intake.
pub fn validate_hydration(water_intake_liters: f64) -> AppResult<HydrationCheck> {
    if !water_intake_liters.is_finite() || water_intake_liters < 0.0 {
        return Err(AppError::invalid_input(
            "water_intake_liters must be a non-negative number",
        ));
    }
    let hydration_ok = water_intake_liters >= MIN_DAILY_WATER_LITERS;
    let message = if hydration_ok {
        "Hydration on track."
    } else {
        "Drink more water!"
    };
    Ok(HydrationCheck {
        hydration_ok,
        message: message.to_owned(),
    })
}

/// Supplement suggestions for a diet and training goal
#[must_use]
pub fn suggest_supplements(diet: &str, goal: &str) -> Vec<&'static str> {
    let mut suggestions = Vec::new();
    if goal == "gain_muscle" {
        suggestions.push("Whey Protein");
    }
    if diet == "vegan" {
        suggestions.push("Vitamin B12");
    }
    if suggestions.is_empty() {
        suggestions.push("General multivitamin");
    }
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_calories_by_goal() {
        assert_eq!(recommend_daily_calories(CalorieGoal::LoseWeight), 1700);
        assert_eq!(recommend_daily_calories(CalorieGoal::Maintain), 2000);
        assert_eq!(recommend_daily_calories(CalorieGoal::GainWeight), 2300);
        assert_eq!(CalorieGoal::from_str_lossy("bulk"), CalorieGoal::Maintain);
    }

    #[test]
    fn test_hydration_threshold_is_inclusive() {
        assert!(validate_hydration(2.0).unwrap().hydration_ok);
        let low = validate_hydration(1.5).unwrap();
        assert!(!low.hydration_ok);
        assert_eq!(low.message, "Drink more water!");
        assert!(validate_hydration(-1.0).is_err());
    }

    #[test]
    fn test_supplements() {
        assert_eq!(
            suggest_supplements("vegan", "gain_muscle"),
            vec!["Whey Protein", "Vitamin B12"]
        );
        assert_eq!(
            suggest_supplements("omnivore", "general"),
            vec!["General multivitamin"]
        );
        assert_eq!(suggest_supplements("vegan", "general"), vec!["Vitamin B12"]);
    }
}
