// ABOUTME: Fitness computation engine for progress tracking and derived metrics
// ABOUTME: Pure calculators plus store-backed trend, goal, and report components
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![deny(unsafe_code)]

//! # FitTrack Intelligence
//!
//! Everything in this crate is either a closed-form formula, a static lookup,
//! or a small fold over a bounded window of progress entries. Components that
//! need stored history read it through the [`store::ProgressStore`] trait so
//! they can be exercised against an in-memory store in tests.

/// Weight and length unit conversion
pub mod units;

/// Calorie burn, macro split, weekly weight change, and workout comparison
pub mod metrics;

/// Query capability the trend and report components consume
pub mod store;

/// Rest-day suggestion, weight trend, and missing-workout alert
pub mod trends;

/// Goal date projection from current and target weight
pub mod goals;

/// Full-history fitness report
pub mod report;

/// Daily calorie targets, hydration, snacks, and supplements
pub mod nutrition;

/// Stretching routine and workout plan balance check
pub mod training;

/// Injected random selection for recommendations
pub mod selection;

pub use goals::{GoalProjection, GoalProjector};
pub use metrics::round2;
pub use report::{FitnessReport, ReportAggregator};
pub use selection::{RandomSource, SeededSelector};
pub use store::ProgressStore;
pub use trends::{MissingWorkoutAlert, ProgressTrend, RestDaySuggestion, TrendEngine};
pub use units::{Conversion, MeasurementUnit};
