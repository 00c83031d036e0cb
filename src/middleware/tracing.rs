// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Creates a span per request carrying its id and logs each completed request

use std::time::Instant;

use crate::constants::REQUEST_ID_HEADER;
use crate::logging::AppLogger;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tower_http::trace::MakeSpan;
use tracing::Span;

/// Create a tracing span for HTTP requests
pub fn create_request_span(method: &str, path: &str, request_id: &str) -> Span {
    tracing::info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = %request_id,
    )
}

/// Span factory for `TraceLayer`; reads the id set by `SetRequestIdLayer`
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("unknown");
        create_request_span(request.method().as_str(), request.uri().path(), request_id)
    }
}

/// Log method, path, status, and latency of every request
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    AppLogger::log_api_request(
        method.as_str(),
        &path,
        response.status().as_u16(),
        duration_ms,
    );
    response
}
