//! Rate limiting middleware for axum.
//!
//! Checks the `RateLimiter` port before every request:
//! 1. Global rate limit (infrastructure protection)
//! 2. Per-IP rate limit (flood protection)
//!
//! Endpoint groups with their own ceiling check it from the handler via
//! [`RateLimitCheck`].
//!
//! Rate limit status is returned in standard HTTP headers:
//! - `X-RateLimit-Limit`: Maximum requests allowed in the window
//! - `X-RateLimit-Remaining`: Requests remaining in the current window
//! - `X-RateLimit-Reset`: Unix timestamp when the window resets
//! - `Retry-After`: Seconds to wait (only on 429 response)
//!
//! A failing limiter never blocks traffic; the failure is logged and the
//! request goes through.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::dto::ErrorResponse;
use crate::domain::foundation::ErrorCode;
use crate::ports::{RateLimitKey, RateLimitResult, RateLimitStatus, RateLimiter};

/// Rate limiter middleware state.
pub type RateLimiterState = Arc<dyn RateLimiter>;

/// Standard rate limit header names.
pub mod headers {
    use super::HeaderName;

    pub static X_RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
    pub static X_RATELIMIT_REMAINING: HeaderName = HeaderName::from_static("x-ratelimit-remaining");
    pub static X_RATELIMIT_RESET: HeaderName = HeaderName::from_static("x-ratelimit-reset");
}

/// Client address resolved by the middleware, stored in request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

/// Rate limiting middleware that checks global and per-IP limits.
///
/// Adds the per-IP limit headers to every response that went through.
pub async fn rate_limit_middleware(
    State(limiter): State<RateLimiterState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    mut request: Request,
    next: Next,
) -> Response {
    let client_ip = extract_client_ip(&request, connect_info.as_ref());

    match limiter.check(RateLimitKey::global()).await {
        Ok(RateLimitResult::Denied(denied)) => {
            tracing::warn!(limit = denied.limit, "Global rate limit reached");
            return rate_limit_response(denied.limit, denied.retry_after_secs, &denied.message);
        }
        Err(e) => {
            tracing::warn!("Rate limiter unavailable: {}", e);
        }
        Ok(RateLimitResult::Allowed(_)) => {}
    }

    let ip_status = match &client_ip {
        Some(ip) => match limiter.check(RateLimitKey::ip(ip)).await {
            Ok(RateLimitResult::Denied(denied)) => {
                tracing::info!(client_ip = %ip, "Client rate limit reached");
                return rate_limit_response(denied.limit, denied.retry_after_secs, &denied.message);
            }
            Ok(RateLimitResult::Allowed(status)) => Some(status),
            Err(e) => {
                tracing::warn!("Rate limiter unavailable for IP check: {}", e);
                None
            }
        },
        None => None,
    };

    if let Some(ip) = client_ip {
        request.extensions_mut().insert(ClientIp(ip));
    }

    let mut response = next.run(request).await;

    if let Some(status) = ip_status {
        add_rate_limit_headers(&mut response, &status);
    }

    response
}

/// Extract client IP from request, checking forwarded headers first.
///
/// Order of precedence:
/// 1. X-Forwarded-For header (first IP in list)
/// 2. X-Real-IP header
/// 3. ConnectInfo socket address
fn extract_client_ip<B>(
    request: &axum::http::Request<B>,
    connect_info: Option<&ConnectInfo<SocketAddr>>,
) -> Option<String> {
    if let Some(forwarded) = request
        .headers()
        .get("X-Forwarded-For")
        .and_then(|h| h.to_str().ok())
    {
        if let Some(first_ip) = forwarded.split(',').next().map(str::trim) {
            if !first_ip.is_empty() {
                return Some(first_ip.to_string());
            }
        }
    }

    if let Some(real_ip) = request
        .headers()
        .get("X-Real-IP")
        .and_then(|h| h.to_str().ok())
    {
        return Some(real_ip.trim().to_string());
    }

    connect_info.map(|ci| ci.0.ip().to_string())
}

/// Create a 429 Too Many Requests response.
pub(crate) fn rate_limit_response(limit: u32, retry_after_secs: u32, message: &str) -> Response {
    let body = ErrorResponse::with_details(
        ErrorCode::RateLimited,
        message,
        serde_json::json!({ "retry_after_secs": retry_after_secs }),
    );
    let mut response = (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();

    let headers = response.headers_mut();
    headers.insert(headers::X_RATELIMIT_LIMIT.clone(), HeaderValue::from(limit));
    headers.insert(headers::X_RATELIMIT_REMAINING.clone(), HeaderValue::from(0u32));
    headers.insert(header::RETRY_AFTER, HeaderValue::from(retry_after_secs));

    response
}

fn add_rate_limit_headers(response: &mut Response, status: &RateLimitStatus) {
    let headers = response.headers_mut();
    headers.insert(headers::X_RATELIMIT_LIMIT.clone(), HeaderValue::from(status.limit));
    headers.insert(
        headers::X_RATELIMIT_REMAINING.clone(),
        HeaderValue::from(status.remaining),
    );
    headers.insert(
        headers::X_RATELIMIT_RESET.clone(),
        HeaderValue::from(status.reset_at.as_unix_secs()),
    );
}

/// Per-resource limiting for endpoint groups stricter than the general
/// per-IP limit.
#[derive(Clone)]
pub struct RateLimitCheck {
    limiter: Arc<dyn RateLimiter>,
}

impl RateLimitCheck {
    pub fn new(limiter: Arc<dyn RateLimiter>) -> Self {
        Self { limiter }
    }

    /// Counts one request against `resource` for `ip`.
    pub async fn check_resource(&self, ip: &str, resource: &str) -> Result<(), RateLimitRejection> {
        match self.limiter.check(RateLimitKey::ip_resource(ip, resource)).await {
            Ok(RateLimitResult::Allowed(_)) => Ok(()),
            Ok(RateLimitResult::Denied(denied)) => Err(RateLimitRejection {
                limit: denied.limit,
                retry_after_secs: denied.retry_after_secs,
                message: denied.message,
            }),
            Err(e) => {
                tracing::warn!(resource, "Rate limiter unavailable: {}", e);
                Ok(())
            }
        }
    }
}

/// Rejection for rate limit exceeded.
#[derive(Debug, Clone)]
pub struct RateLimitRejection {
    pub limit: u32,
    pub retry_after_secs: u32,
    pub message: String,
}

impl IntoResponse for RateLimitRejection {
    fn into_response(self) -> Response {
        rate_limit_response(self.limit, self.retry_after_secs, &self.message)
    }
}
