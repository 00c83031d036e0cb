// ABOUTME: Request extractors shared by the route handlers
// ABOUTME: Parses record ids from the URL path into the JSON error envelope on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use crate::errors::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

/// Record id taken from the single `:id` segment of the route
///
/// A malformed id is rejected with `INVALID_INPUT` instead of axum's
/// plain-text response.
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<Uuid>::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}
