//! Rate-limit middleware, applied to the whole API router.

use std::net::SocketAddr;

use axum::extract::ConnectInfo;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Extension;

use super::error::ApiError;
use super::types::ApiContext;

/// Admission gate in front of every route. The client identity is the
/// peer IP; requests with no peer address (in-process test calls) share
/// one "anonymous" bucket.
pub async fn rate_limit(
    Extension(ctx): Extension<ApiContext>,
    request: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let identity = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "anonymous".to_string());

    let admitted = {
        let mut limiter = ctx.rate_limiter.lock().unwrap_or_else(|e| e.into_inner());
        limiter.check(&identity)
    };

    match admitted {
        Ok(()) => next.run(request).await,
        Err(retry_after) => {
            tracing::warn!(%identity, retry_after, "rate limit exceeded");
            ApiError::RateLimited { retry_after }.into_response()
        }
    }
}
