// ABOUTME: Route handlers for subject profile CRUD
// ABOUTME: Create, list, fetch, replace, and delete tracked user profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use std::sync::Arc;

use crate::errors::AppError;
use crate::models::{Subject, SubjectRequest};
use crate::resources::ServerResources;
use crate::routes::extractors::PathId;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

/// Subject routes handler
pub struct SubjectRoutes;

impl SubjectRoutes {
    /// Create all subject routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/subjects",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/subjects/:id",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    async fn load(resources: &ServerResources, id: Uuid) -> Result<Subject, AppError> {
        resources
            .database
            .get_subject(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Subject {id}")))
    }

    /// Handle POST /api/subjects
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<SubjectRequest>,
    ) -> Result<Response, AppError> {
        let subject = Subject::from_request(body)?;
        resources.database.create_subject(&subject).await?;
        Ok((StatusCode::CREATED, Json(subject)).into_response())
    }

    /// Handle GET /api/subjects
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let subjects = resources.database.list_subjects().await?;
        Ok(Json(subjects).into_response())
    }

    /// Handle GET /api/subjects/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        PathId(id): PathId,
    ) -> Result<Response, AppError> {
        let subject = Self::load(&resources, id).await?;
        Ok(Json(subject).into_response())
    }

    /// Handle PUT /api/subjects/:id
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        PathId(id): PathId,
        Json(body): Json<SubjectRequest>,
    ) -> Result<Response, AppError> {
        let mut subject = Self::load(&resources, id).await?;
        subject.apply(body)?;
        resources.database.update_subject(&subject).await?;
        Ok(Json(subject).into_response())
    }

    /// Handle DELETE /api/subjects/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        PathId(id): PathId,
    ) -> Result<Response, AppError> {
        resources.database.delete_subject(id).await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
