//! Middleware for logging requests and responses.

use axum::{
    body::{Body, to_bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::internal_server_error::InternalServerError;

/// The number of bytes of a response body to log at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// The request line is logged at the `info` level along with the response
/// status. If the response body is longer than [LOG_BODY_LENGTH_LIMIT] bytes,
/// it is truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    tracing::info!("Received request: {method} {uri}");

    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("could not read response body for {method} {uri}: {error}");
            return InternalServerError.into_response();
        }
    };

    log_response(parts.status, &String::from_utf8_lossy(&body_bytes));

    Response::from_parts(parts, Body::from(body_bytes))
}

fn log_response(status: StatusCode, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        let end = floor_char_boundary(body, LOG_BODY_LENGTH_LIMIT);
        tracing::info!("Sending response: {status}\nbody: {:}...", &body[..end]);
        tracing::debug!("Full response body: {body:?}");
    } else {
        tracing::info!("Sending response: {status}\nbody: {body:?}");
    }
}

/// The largest index no greater than `index` that is on a char boundary of `text`.
fn floor_char_boundary(text: &str, index: usize) -> usize {
    (0..=index.min(text.len()))
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0)
}
