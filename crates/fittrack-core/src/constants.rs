// ABOUTME: Conversion factors and formula constants used by the calculators
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

/// Unit conversion factors
pub mod units {
    /// Pounds per kilogram
    pub const LBS_PER_KG: f64 = 2.20462;

    /// Centimeters per inch
    pub const CM_PER_INCH: f64 = 2.54;

    /// Days per week
    pub const DAYS_PER_WEEK: f64 = 7.0;
}

/// Energy content of macronutrients (kcal per gram)
pub mod macros {
    /// Protein kcal per gram
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;

    /// Carbohydrate kcal per gram
    pub const CARBS_KCAL_PER_G: f64 = 4.0;

    /// Fat kcal per gram
    pub const FAT_KCAL_PER_G: f64 = 9.0;

    /// Default macro ratio: protein share
    pub const DEFAULT_PROTEIN_RATIO: f64 = 0.3;

    /// Default macro ratio: fat share
    pub const DEFAULT_FAT_RATIO: f64 = 0.2;

    /// Default macro ratio: carbohydrate share
    pub const DEFAULT_CARBS_RATIO: f64 = 0.5;

    /// Default daily calories when a macro request omits them
    pub const DEFAULT_CALORIES: f64 = 2000.0;
}

/// Calorie burn estimate constants
pub mod calories {
    /// Reference body weight the per-minute burn rate is normalized to (kg)
    pub const REFERENCE_WEIGHT_KG: f64 = 70.0;

    /// kcal burned per minute at the reference weight
    pub const KCAL_PER_MINUTE_AT_REFERENCE: f64 = 5.0;

    /// Baseline daily calorie recommendation
    pub const BASE_DAILY_CALORIES: i64 = 2000;

    /// Adjustment applied for weight loss or gain goals
    pub const GOAL_ADJUSTMENT: i64 = 300;
}

/// Goal tracking and progress window constants
pub mod goals {
    /// Number of periods the weekly weight change is spread over
    pub const WEIGHT_CHANGE_PERIODS: f64 = 10.0;

    /// Assumed sustainable weight change per week (kg)
    pub const WEEKLY_RATE_KG: f64 = 0.5;

    /// Entries inspected for the rest-day suggestion
    pub const REST_DAY_WINDOW: u32 = 3;

    /// Entries inspected for the weight trend
    pub const TREND_WINDOW: u32 = 2;

    /// Lookback (days, inclusive) for the missing-workout alert
    pub const MISSING_WORKOUT_LOOKBACK_DAYS: i64 = 3;

    /// Minimum daily water intake considered on track (liters)
    pub const MIN_DAILY_WATER_LITERS: f64 = 2.0;
}

/// Default values applied by the request layer when fields are omitted
pub mod defaults {
    /// Subject weight used for calorie burn when none is supplied (kg)
    pub const USER_WEIGHT_KG: f64 = 70.0;

    /// Current weight used by the weekly change calculator (kg)
    pub const CURRENT_WEIGHT_KG: f64 = 70.0;

    /// Goal weight used by the weekly change calculator (kg)
    pub const GOAL_WEIGHT_KG: f64 = 65.0;
}
