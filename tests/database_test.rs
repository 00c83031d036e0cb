// ABOUTME: Integration tests for the SQLite record store
// ABOUTME: Covers CRUD, uniqueness, cascade delete, ordering, and store-backed trend queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    create_test_database, create_test_meal_plan, create_test_subject, create_test_workout, date,
    record_entry,
};
use fittrack_intelligence::{ProgressStore, ProgressTrend, ReportAggregator, TrendEngine};
use fittrack_server::config::DatabaseUrl;
use fittrack_server::database::Database;
use fittrack_server::errors::ErrorCode;
use fittrack_server::models::{Difficulty, Subject, SubjectRequest};
use uuid::Uuid;

// ============================================================================
// Subjects
// ============================================================================

#[tokio::test]
async fn test_subject_create_and_lookup() {
    let db = create_test_database().await.unwrap();
    let subject = create_test_subject(&db, "alice", Some(70.0)).await.unwrap();

    let by_id = db.get_subject(subject.id).await.unwrap().unwrap();
    assert_eq!(by_id.username, "alice");
    assert_eq!(by_id.weight_kg, Some(70.0));
    assert_eq!(by_id.age, Some(30));

    let by_name = db.get_subject_by_username("alice").await.unwrap().unwrap();
    assert_eq!(by_name.id, subject.id);

    assert!(db.get_subject(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let db = create_test_database().await.unwrap();
    create_test_subject(&db, "alice", None).await.unwrap();

    let err = create_test_subject(&db, "alice", Some(60.0))
        .await
        .unwrap_err();
    let app_err = err.downcast_ref::<fittrack_server::errors::AppError>().unwrap();
    assert_eq!(app_err.code, ErrorCode::ResourceAlreadyExists);
}

#[tokio::test]
async fn test_subject_update_and_list() {
    let db = create_test_database().await.unwrap();
    let mut subject = create_test_subject(&db, "alice", Some(70.0)).await.unwrap();
    create_test_subject(&db, "bob", None).await.unwrap();

    subject
        .apply(SubjectRequest {
            username: "alice2".into(),
            age: Some(31),
            height_cm: None,
            weight_kg: Some(68.5),
        })
        .unwrap();
    db.update_subject(&subject).await.unwrap();

    let stored = db.get_subject(subject.id).await.unwrap().unwrap();
    assert_eq!(stored.username, "alice2");
    assert_eq!(stored.weight_kg, Some(68.5));
    assert_eq!(stored.height_cm, None);

    assert_eq!(db.list_subjects().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_unknown_subject_is_not_found() {
    let db = create_test_database().await.unwrap();
    let ghost = Subject::from_request(SubjectRequest {
        username: "ghost".into(),
        age: None,
        height_cm: None,
        weight_kg: None,
    })
    .unwrap();

    let err = db.update_subject(&ghost).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    let err = db.delete_subject(ghost.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_delete_subject_cascades_progress() {
    let db = create_test_database().await.unwrap();
    let subject = create_test_subject(&db, "alice", Some(70.0)).await.unwrap();
    record_entry(&db, subject.id, date(2025, 1, 1), 70.0, 1)
        .await
        .unwrap();
    record_entry(&db, subject.id, date(2025, 1, 2), 69.5, 1)
        .await
        .unwrap();

    db.delete_subject(subject.id).await.unwrap();

    assert!(db.get_subject(subject.id).await.unwrap().is_none());
    assert!(db.list_progress_entries(subject.id).await.unwrap().is_empty());
}

// ============================================================================
// Workouts and meal plans
// ============================================================================

#[tokio::test]
async fn test_workout_crud_and_difficulty_filter() {
    let db = create_test_database().await.unwrap();
    let run = create_test_workout(&db, "Run", 30, 300.0, Some(Difficulty::Intermediate))
        .await
        .unwrap();
    create_test_workout(&db, "Walk", 45, 150.0, Some(Difficulty::Beginner))
        .await
        .unwrap();
    create_test_workout(&db, "Stretch", 15, 40.0, None)
        .await
        .unwrap();

    assert_eq!(db.list_workouts(None).await.unwrap().len(), 3);

    let beginner = db.list_workouts(Some(Difficulty::Beginner)).await.unwrap();
    assert_eq!(beginner.len(), 1);
    assert_eq!(beginner[0].name, "Walk");

    let stored = db.get_workout(run.id).await.unwrap().unwrap();
    assert_eq!(stored.difficulty, Some(Difficulty::Intermediate));
    assert_eq!(stored.duration_minutes, 30);

    db.delete_workout(run.id).await.unwrap();
    assert!(db.get_workout(run.id).await.unwrap().is_none());
    assert_eq!(
        db.delete_workout(run.id).await.unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
}

#[tokio::test]
async fn test_meal_plan_name_filter_is_case_insensitive() {
    let db = create_test_database().await.unwrap();
    create_test_meal_plan(&db, "Vegan Breakfast", 450).await.unwrap();
    create_test_meal_plan(&db, "Keto Dinner", 800).await.unwrap();

    let matches = db.list_meal_plans(Some("breakfast")).await.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].plan_name, "Vegan Breakfast");

    assert!(db.list_meal_plans(Some("lunch")).await.unwrap().is_empty());
    assert_eq!(db.list_meal_plans(None).await.unwrap().len(), 2);
}

// ============================================================================
// Progress log
// ============================================================================

#[tokio::test]
async fn test_progress_entries_newest_first() {
    let db = create_test_database().await.unwrap();
    let subject = create_test_subject(&db, "alice", Some(70.0)).await.unwrap();

    record_entry(&db, subject.id, date(2025, 1, 1), 71.0, 1)
        .await
        .unwrap();
    record_entry(&db, subject.id, date(2025, 1, 3), 70.0, 0)
        .await
        .unwrap();
    let later_same_day = record_entry(&db, subject.id, date(2025, 1, 3), 69.8, 1)
        .await
        .unwrap();
    record_entry(&db, subject.id, date(2025, 1, 2), 70.5, 1)
        .await
        .unwrap();

    let all = db.list_progress_entries(subject.id).await.unwrap();
    let dates: Vec<_> = all.iter().map(|e| e.date).collect();
    assert_eq!(
        dates,
        vec![
            date(2025, 1, 3),
            date(2025, 1, 3),
            date(2025, 1, 2),
            date(2025, 1, 1)
        ]
    );
    assert_eq!(all[0].id, later_same_day.id);

    let recent = db.recent_progress(subject.id, 2).await.unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].id, later_same_day.id);

    let since = db
        .progress_since(subject.id, date(2025, 1, 2))
        .await
        .unwrap();
    assert_eq!(since.len(), 3);
}

#[tokio::test]
async fn test_progress_for_unknown_subject_is_not_found() {
    let db = create_test_database().await.unwrap();
    let err = record_entry(&db, Uuid::new_v4(), date(2025, 1, 1), 70.0, 1)
        .await
        .unwrap_err();
    let app_err = err.downcast_ref::<fittrack_server::errors::AppError>().unwrap();
    assert_eq!(app_err.code, ErrorCode::ResourceNotFound);
}

// ============================================================================
// Store-backed trend components
// ============================================================================

#[tokio::test]
async fn test_missing_workout_window_is_inclusive() {
    let db = create_test_database().await.unwrap();
    let subject = create_test_subject(&db, "alice", None).await.unwrap();
    let today = date(2025, 1, 10);

    record_entry(&db, subject.id, date(2025, 1, 6), 70.0, 1)
        .await
        .unwrap();
    let engine = TrendEngine::new(&db);
    let alert = engine.missing_workout_alert(subject.id, today).await.unwrap();
    assert!(alert.alert);
    assert_eq!(alert.message, "You've missed workouts recently!");

    record_entry(&db, subject.id, date(2025, 1, 7), 70.0, 1)
        .await
        .unwrap();
    let alert = engine.missing_workout_alert(subject.id, today).await.unwrap();
    assert!(!alert.alert);
    assert_eq!(alert.message, "No missing workouts.");
}

#[tokio::test]
async fn test_trend_and_rest_days_from_store() {
    let db = create_test_database().await.unwrap();
    let subject = create_test_subject(&db, "alice", Some(72.0)).await.unwrap();
    let engine = TrendEngine::new(&db);

    assert_eq!(
        engine.progress_trend(subject.id).await.unwrap(),
        ProgressTrend::InsufficientData
    );

    record_entry(&db, subject.id, date(2025, 1, 1), 72.0, 1)
        .await
        .unwrap();
    record_entry(&db, subject.id, date(2025, 1, 2), 71.5, 2)
        .await
        .unwrap();
    assert_eq!(
        engine.progress_trend(subject.id).await.unwrap(),
        ProgressTrend::Decreasing
    );
    assert_eq!(
        engine
            .suggest_rest_days(subject.id)
            .await
            .unwrap()
            .rest_days_recommended,
        0
    );

    record_entry(&db, subject.id, date(2025, 1, 3), 71.5, 1)
        .await
        .unwrap();
    assert_eq!(
        engine.progress_trend(subject.id).await.unwrap(),
        ProgressTrend::StableOrIncreasing
    );
    assert_eq!(
        engine
            .suggest_rest_days(subject.id)
            .await
            .unwrap()
            .rest_days_recommended,
        1
    );
}

#[tokio::test]
async fn test_report_sums_full_history() {
    let db = create_test_database().await.unwrap();
    let subject = create_test_subject(&db, "alice", Some(75.0)).await.unwrap();

    let report = ReportAggregator::generate(&db, subject.id).await.unwrap();
    assert_eq!(report.total_workouts_completed, 0);
    assert_eq!(report.current_weight, Some(75.0));

    for (day, weight) in [(1, 74.0), (2, 73.5), (3, 73.0), (4, 72.8)] {
        record_entry(&db, subject.id, date(2025, 2, day), weight, 2)
            .await
            .unwrap();
    }

    let report = ReportAggregator::generate(&db, subject.id).await.unwrap();
    assert_eq!(report.username, "alice");
    assert_eq!(report.total_workouts_completed, 8);
    assert_eq!(report.current_weight, Some(72.8));
    assert_eq!(report.message, "Keep up the good work!");
}

// ============================================================================
// File-backed database
// ============================================================================

#[tokio::test]
async fn test_file_database_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let url = DatabaseUrl::SQLite {
        path: dir.path().join("fittrack.db"),
    };

    let subject_id = {
        let db = Database::new(&url).await.unwrap();
        let subject = create_test_subject(&db, "alice", Some(70.0)).await.unwrap();
        record_entry(&db, subject.id, date(2025, 1, 1), 70.0, 1)
            .await
            .unwrap();
        db.close().await;
        assert!(db.ping().await.is_err());
        subject.id
    };

    let reopened = Database::new(&url).await.unwrap();
    assert!(reopened.get_subject(subject_id).await.unwrap().is_some());
    assert_eq!(
        reopened.list_progress_entries(subject_id).await.unwrap().len(),
        1
    );
}
