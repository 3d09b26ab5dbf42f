//! Rate limiting and error recording middleware

use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

use crate::error::{ApiError, Result};
use crate::services::rate_limit::{retry_after_secs, RateDecision};
use crate::AppState;

/// Header identifying the calling client for rate limiting.
pub const CLIENT_ID_HEADER: &str = "x-client-id";

/// Client key used when no client id header is sent.
pub const ANONYMOUS_CLIENT: &str = "anonymous";

/// Response header carrying the requests left in the current window.
pub const RATE_LIMIT_REMAINING_HEADER: HeaderName =
    HeaderName::from_static("x-ratelimit-remaining");

/// Rate limit middleware - one window per client id
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response> {
    let client = request
        .headers()
        .get(CLIENT_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .unwrap_or(ANONYMOUS_CLIENT)
        .to_string();

    match state.limiter.check(&client) {
        RateDecision::Allowed { remaining } => {
            let mut response = next.run(request).await;
            response
                .headers_mut()
                .insert(RATE_LIMIT_REMAINING_HEADER, HeaderValue::from(remaining));
            Ok(response)
        }
        RateDecision::Limited { retry_after } => Err(ApiError::RateLimited {
            retry_after_secs: retry_after_secs(retry_after),
        }),
    }
}

/// Records every 4xx/5xx response in the error log
pub async fn error_log_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        tracing::warn!(%method, %path, status = status.as_u16(), "Request failed");
        state.errors.record(&method, &path, status.as_u16());
    }

    response
}
