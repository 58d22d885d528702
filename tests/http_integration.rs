//! Integration tests for the HTTP API.
//!
//! Requests go through the full router built from configuration, with
//! every layer in place, using `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use bcr_form::adapters::scoring::StaticSecurityScorer;
use bcr_form::app::{build_router, rate_limiter};
use bcr_form::config::{AppConfig, RateLimitSettings, SimulationConfig};
use bcr_form::ports::RateLimiter;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn test_config() -> AppConfig {
    AppConfig {
        simulation: SimulationConfig::instant(),
        ..AppConfig::default()
    }
}

fn app_with(config: AppConfig) -> Router {
    let limiter = rate_limiter(&config.rate_limit).map(|l| Arc::new(l) as Arc<dyn RateLimiter>);
    build_router(&config, Arc::new(StaticSecurityScorer::new()), limiter)
}

fn app() -> Router {
    app_with(test_config())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header("X-Forwarded-For", "10.1.1.1")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("X-Forwarded-For", "10.1.1.1")
        .body(Body::empty())
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Chat wizard
// =============================================================================

#[tokio::test]
async fn chat_start_returns_welcome() {
    let response = app().oneshot(get("/chat/start")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert!(body["botMessage"]
        .as_str()
        .unwrap()
        .starts_with("¡Hola! Bienvenido al Banco de Costa Rica"));
    assert_eq!(body["newState"]["step"], 1);
    assert_eq!(body["startValidation"], false);
}

#[tokio::test]
async fn chat_conversation_round_trips_state() {
    let app = app();
    let mut state = json!({ "step": 1, "collected": {} });

    for message in ["Juan Perez", "123456789", "88887777", "Avenida Central 100m norte"] {
        let response = app
            .clone()
            .oneshot(post_json("/chat", json!({ "message": message, "state": state })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        state = json!({
            "step": body["newState"]["step"],
            "collected": body["newState"]["collected"],
        });
        if message.starts_with("Avenida") {
            assert_eq!(body["startValidation"], true);
            assert_eq!(body["newState"]["waitingFor"], Value::Null);
        }
    }

    assert_eq!(state["step"], 5);
    assert_eq!(state["collected"]["cedula"], "123456789");
}

#[tokio::test]
async fn chat_rejected_cedula_stays_at_step_two() {
    let response = app()
        .oneshot(post_json(
            "/chat",
            json!({
                "message": "12345678",
                "state": { "step": 2, "collected": { "nombre": "Juan Perez" } }
            }),
        ))
        .await
        .unwrap();

    let body = json_body(response).await;
    assert_eq!(body["newState"]["step"], 2);
    assert_eq!(body["newState"]["waitingFor"], "cedula");
}

#[tokio::test]
async fn chat_injection_is_bad_request() {
    let response = app()
        .oneshot(post_json(
            "/chat",
            json!({ "message": "1; DROP TABLE solicitudes" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["code"], "FORBIDDEN_CONTENT");
}

#[tokio::test]
async fn chat_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn chat_badly_typed_state_restarts_conversation() {
    let app = app();
    for state in [
        json!({ "step": "2", "collected": {} }),
        json!({ "step": 2.0, "collected": {} }),
        json!({ "step": 2, "collected": null }),
        json!({ "step": 2, "collected": { "nombre": 5 } }),
    ] {
        let response = app
            .clone()
            .oneshot(post_json("/chat", json!({ "message": "Ana Mora", "state": state })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{}", state);

        let body = json_body(response).await;
        assert_eq!(body["newState"]["step"], 1, "{}", state);
        assert_eq!(body["newState"]["collected"], json!({}));
        assert!(body["botMessage"]
            .as_str()
            .unwrap()
            .starts_with("¡Hola! Bienvenido al Banco de Costa Rica"));
    }
}

#[tokio::test]
async fn chat_missing_message_is_bad_request() {
    let response = app()
        .oneshot(post_json("/chat", json!({ "state": { "step": 1 } })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], "VALIDATION_FAILED");
}

// =============================================================================
// Simulated endpoints
// =============================================================================

#[tokio::test]
async fn guide_answers_with_response_field() {
    let response = app()
        .oneshot(post_json("/chat-guia", json!({ "message": "¿Cuánto tiempo demora?" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["response"].as_str().unwrap().contains("24-48 horas"));
}

#[tokio::test]
async fn validate_data_approves() {
    let response = app()
        .oneshot(post_json(
            "/validate-data",
            json!({ "nombre": "Ana Mora Solís", "cedula": "123456789", "telefono": "88887777" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["approved"], true);
    let numero = body["numero_solicitud"].as_u64().unwrap();
    assert!((100_000..=999_999).contains(&numero));
    assert_eq!(body["validation_steps"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn validate_data_rejects_bad_phone() {
    let response = app()
        .oneshot(post_json("/validate-data", json!({ "telefono": "18887777" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["details"]["field"], "telefono");
}

#[tokio::test]
async fn validate_address_resolves_costa_rican_address() {
    let response = app()
        .oneshot(post_json(
            "/validate-address",
            json!({ "latitude": 9.93, "longitude": -84.08, "address_components": {} }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["delivery_feasible"], true);
    assert_eq!(body["estimated_delivery"], "24-48 horas");
    let provincia = body["address_components"]["provincia"].as_str().unwrap();
    assert!(body["address_components"]["canton"]
        .as_str()
        .unwrap()
        .starts_with(provincia));
}

#[tokio::test]
async fn validate_address_rejects_out_of_range_latitude() {
    let response = app()
        .oneshot(post_json(
            "/validate-address",
            json!({ "latitude": 95.0, "longitude": -84.08 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["code"], "OUT_OF_RANGE");
    assert_eq!(body["details"]["field"], "latitude");
}

#[tokio::test]
async fn test_exhaustive_reports_static_scores() {
    let response = app()
        .oneshot(post_json("/test-exhaustive", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["summary"]["total_tests"], 10);
    assert_eq!(body["summary"]["passed"], 8);
    assert_eq!(body["summary"]["warnings"], 2);
    assert_eq!(body["ai_analysis"]["security_level"], "ALTO");
    assert_eq!(body["status"], "COMPLETED");
    assert_eq!(body["version"], "2.1");
}

#[tokio::test]
async fn test_automated_returns_ten_results() {
    let response = app().oneshot(get("/test-automated")).await.unwrap();
    let body = json_body(response).await;

    assert_eq!(body["total_tests"], 10);
    assert_eq!(body["results"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn recommendations_include_metadata() {
    let response = app().oneshot(get("/recommendations")).await.unwrap();
    let body = json_body(response).await;

    assert_eq!(body["recommendations"].as_array().unwrap().len(), 6);
    assert_eq!(body["metadata"]["total_categories"], 6);
    assert_eq!(body["metadata"]["priority_distribution"]["ALTA"], 2);
    assert_eq!(
        body["metadata"]["implementation_status"]["pending"],
        "Pendiente"
    );
}

#[tokio::test]
async fn submit_form_accepts_urlencoded_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/submit-form")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(
            "nombre=Ana+Mora&email=ana%40correo.cr&telefono=8888-7777&mensaje=Quiero+una+tarjeta",
        ))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "procesando");
    assert_eq!(body["data"]["telefono"], "88887777");
    assert_eq!(body["data"]["numero_solicitud"], body["numero_solicitud"]);
}

#[tokio::test]
async fn submit_form_missing_field_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/submit-form")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("nombre=Ana+Mora&email=ana%40correo.cr"))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn health_reports_ok() {
    let response = app().oneshot(get("/health")).await.unwrap();
    let body = json_body(response).await;
    assert_eq!(body, json!({ "status": "ok", "message": "Servidor funcionando correctamente" }));
}

// =============================================================================
// Cross-cutting layers
// =============================================================================

#[tokio::test]
async fn every_response_carries_security_headers() {
    let response = app()
        .oneshot(post_json("/chat", json!({ "message": "" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let headers = response.headers();
    for name in [
        "x-content-type-options",
        "x-frame-options",
        "x-xss-protection",
        "strict-transport-security",
        "content-security-policy",
    ] {
        assert!(headers.contains_key(name), "missing {}", name);
    }
}

#[tokio::test]
async fn per_client_limit_returns_429_with_retry_after() {
    let config = AppConfig {
        rate_limit: RateLimitSettings {
            requests_per_minute: 3,
            ..RateLimitSettings::default()
        },
        ..test_config()
    };
    let app = app_with(config);

    for _ in 0..3 {
        let response = app.clone().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(response.headers().contains_key(header::RETRY_AFTER));
    assert_eq!(response.headers()["x-ratelimit-limit"], "3");
    assert!(response.headers().contains_key("x-frame-options"));

    let body = json_body(response).await;
    assert_eq!(body["code"], "RATE_LIMITED");
}

#[tokio::test]
async fn disabled_rate_limit_sends_no_limit_headers() {
    let config = AppConfig {
        rate_limit: RateLimitSettings {
            enabled: false,
            ..RateLimitSettings::default()
        },
        ..test_config()
    };
    let response = app_with(config).oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(!response.headers().contains_key("x-ratelimit-limit"));
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/chat")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn routers_do_not_share_counters() {
    let config = AppConfig {
        rate_limit: RateLimitSettings {
            requests_per_minute: 1,
            ..RateLimitSettings::default()
        },
        ..test_config()
    };
    let first = app_with(config.clone());
    let second = app_with(config);

    assert_eq!(first.clone().oneshot(get("/health")).await.unwrap().status(), StatusCode::OK);
    assert_eq!(
        first.oneshot(get("/health")).await.unwrap().status(),
        StatusCode::TOO_MANY_REQUESTS
    );
    assert_eq!(second.oneshot(get("/health")).await.unwrap().status(), StatusCode::OK);
}

// =============================================================================
// Static pages
// =============================================================================

fn static_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    std::fs::create_dir_all(root.join("css")).unwrap();
    std::fs::create_dir_all(root.join("js")).unwrap();
    std::fs::write(root.join("index.html"), "<html>formulario</html>").unwrap();
    std::fs::write(root.join("pruebas-automaticas.html"), "<html>pruebas</html>").unwrap();
    std::fs::write(root.join("reporte-pruebas.html"), "<html>reporte</html>").unwrap();
    std::fs::write(root.join("css").join("styles.css"), "body {}").unwrap();
    std::fs::write(root.join("js").join("chat.js"), "// chat").unwrap();
    dir
}

#[tokio::test]
async fn pages_and_assets_are_served() {
    let pages = static_dir();
    let mut config = test_config();
    config.server.static_dir = pages.path().to_path_buf();
    let app = app_with(config);

    for (uri, expected) in [
        ("/", "formulario"),
        ("/pruebas-automaticas", "pruebas"),
        ("/reporte-pruebas", "reporte"),
        ("/css/styles.css", "body {}"),
        ("/js/chat.js", "// chat"),
    ] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains(expected), "{}", uri);
    }
}
