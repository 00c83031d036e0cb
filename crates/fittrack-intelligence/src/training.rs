// ABOUTME: Training helpers: preset stretching routine and workout plan balance check
// ABOUTME: A plan is balanced when it covers both upper and lower body movements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use serde::{Deserialize, Serialize};

/// Preset stretching routine
pub const STRETCHING_ROUTINE: [&str; 4] = [
    "Neck Tilts x 10 reps",
    "Shoulder Rolls x 10 reps",
    "Hamstring Stretch 30s",
    "Calf Stretch 30s",
];

const UPPER_BODY_KEYWORDS: [&str; 2] = ["push", "pull"];
const LOWER_BODY_KEYWORDS: [&str; 2] = ["squat", "lunge"];

/// Outcome of a workout plan check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlanCheck {
    /// Whether the plan covers upper and lower body
    pub balanced: bool,
    /// Feedback message
    pub message: String,
}

fn mentions_any<S: AsRef<str>>(workouts: &[S], keywords: &[&str]) -> bool {
    workouts.iter().any(|workout| {
        let lowered = workout.as_ref().to_lowercase();
        keywords.iter().any(|keyword| lowered.contains(keyword))
    })
}

/// Check that a plan mentions an upper-body and a lower-body movement
#[must_use]
pub fn validate_workout_plan<S: AsRef<str>>(workouts: &[S]) -> WorkoutPlanCheck {
    let balanced = mentions_any(workouts, &UPPER_BODY_KEYWORDS)
        && mentions_any(workouts, &LOWER_BODY_KEYWORDS);
    let message = if balanced {
        "Workout plan is balanced."
    } else {
        "Consider adding more variety."
    };
    WorkoutPlanCheck {
        balanced,
        message: message.to_owned(),
    }
}
