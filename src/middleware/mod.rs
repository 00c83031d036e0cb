// ABOUTME: HTTP middleware for request tracing, request ids, CORS, and timeouts
// ABOUTME: Assembles the tower layer stack wrapped around every route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

/// CORS configuration
pub mod cors;
/// Request spans and access logging
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{create_request_span, log_requests, RequestSpan};

use std::time::Duration;

use crate::config::ServerConfig;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Wrap `router` in the standard middleware stack
///
/// Outermost first: request id assignment, tracing span, access log, request
/// id propagation to the response, CORS, timeout.
pub fn apply_middleware(router: Router, config: &ServerConfig) -> Router {
    let stack = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http().make_span_with(RequestSpan))
        .layer(axum::middleware::from_fn(log_requests))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(setup_cors(config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )));

    router.layer(stack)
}
