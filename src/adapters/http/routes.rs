//! Router assembly.
//!
//! Routes:
//! - `GET /chat/start` - Welcome prompt and initial state
//! - `POST /chat` - One wizard turn
//! - `POST /chat-guia` - Help assistant
//! - `POST /validate-data` - Simulated registry validation
//! - `POST /validate-address` - Simulated address lookup
//! - `POST /test-exhaustive` - Security assessment report
//! - `GET /test-automated` - Random applicant records
//! - `GET /recommendations` - Improvement catalogue
//! - `POST /submit-form` - Contact form
//! - `GET /health` - Liveness
//! - `GET /`, `/pruebas-automaticas`, `/reporte-pruebas`, `/css/*`, `/js/*` - Static files

use std::path::Path;
use std::time::Duration;

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request};
use axum::routing::{get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    chat, chat_guia, health, recommendations, start_chat, submit_form, test_automated,
    test_exhaustive, validate_address, validate_data, AppState,
};
use super::middleware::{rate_limit_middleware, with_security_headers};

/// Settings for the layers wrapped around the API.
#[derive(Debug, Clone)]
pub struct RouterOptions<'a> {
    pub static_dir: &'a Path,
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
}

/// JSON API routes.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/chat/start", get(start_chat))
        .route("/chat", post(chat))
        .route("/chat-guia", post(chat_guia))
        .route("/validate-data", post(validate_data))
        .route("/validate-address", post(validate_address))
        .route("/test-exhaustive", post(test_exhaustive))
        .route("/test-automated", get(test_automated))
        .route("/recommendations", get(recommendations))
        .route("/submit-form", post(submit_form))
        .route("/health", get(health))
}

/// HTML pages and their assets.
fn static_routes(static_dir: &Path) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route_service(
            "/pruebas-automaticas",
            ServeFile::new(static_dir.join("pruebas-automaticas.html")),
        )
        .route_service(
            "/reporte-pruebas",
            ServeFile::new(static_dir.join("reporte-pruebas.html")),
        )
        .nest_service("/css", ServeDir::new(static_dir.join("css")))
        .nest_service("/js", ServeDir::new(static_dir.join("js")))
}

/// Complete application with every layer applied.
pub fn app_router(state: AppState, options: RouterOptions<'_>) -> Router {
    let rate_limiter = state.rate_limiter.clone();

    let mut app = api_router()
        .with_state(state)
        .merge(static_routes(options.static_dir));

    if let Some(limiter) = rate_limiter {
        app = app.layer(axum::middleware::from_fn_with_state(
            limiter,
            rate_limit_middleware,
        ));
    }

    with_security_headers(app)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(options.request_timeout))
        .layer(cors_layer(&options.cors_origins))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Any origin when none are configured, otherwise only the listed ones.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if origins.is_empty() {
        return base.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(allowed))
}
