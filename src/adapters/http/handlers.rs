//! HTTP handlers for the application form endpoints.
//!
//! Handlers sanitize input, call into the domain and map failures onto
//! [`ApiError`]. Random draws happen after any simulated delay so no
//! generator is held across an await.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::{Form, Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Extension;

use super::dto::{
    ChatRequest, ChatResponse, ErrorResponse, GuideRequest, GuideResponse, HealthResponse,
    LocationRequest, RecommendationsResponse,
};
use super::middleware::{ClientIp, RateLimitCheck, RateLimitRejection};
use crate::adapters::rate_limiter::ASSESSMENT_RESOURCE;
use crate::config::SimulationConfig;
use crate::domain::applicant::{sanitize_message, ApplicantData};
use crate::domain::assessment::{resumen, AssessmentReport, SCENARIOS, SYSTEM_RECOMMENDATIONS};
use crate::domain::foundation::{ErrorCode, Timestamp, ValidationError};
use crate::domain::guide::GuideAssistant;
use crate::domain::simulation::{
    resolve_address, run_automated_tests, AddressValidation, AutomatedRun, BackendValidation,
    Coordinates, FormSubmission, SubmissionReceipt,
};
use crate::domain::wizard::ChatWizard;
use crate::ports::{RateLimiter, ScoringError, SecurityScorer};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub wizard: ChatWizard,
    pub guide: GuideAssistant,
    pub scorer: Arc<dyn SecurityScorer>,
    /// `None` when rate limiting is switched off.
    pub rate_limiter: Option<Arc<dyn RateLimiter>>,
    pub simulation: SimulationConfig,
}

impl AppState {
    pub fn new(
        wizard: ChatWizard,
        scorer: Arc<dyn SecurityScorer>,
        rate_limiter: Option<Arc<dyn RateLimiter>>,
        simulation: SimulationConfig,
    ) -> Self {
        Self {
            wizard,
            guide: GuideAssistant::new(),
            scorer,
            rate_limiter,
            simulation,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// Opening message of a new conversation
///
/// GET /chat/start
pub async fn start_chat(State(state): State<AppState>) -> Json<ChatResponse> {
    Json(state.wizard.greeting().into())
}

/// One turn of the data-collection wizard
///
/// POST /chat
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload?;
    let message = sanitize_message(&req.message)?;
    let reply = match req.snapshot() {
        Ok(snapshot) => state.wizard.resume(&message, &snapshot),
        Err(reason) => state.wizard.restart(reason),
    };
    Ok(Json(reply.into()))
}

/// Help assistant
///
/// POST /chat-guia
pub async fn chat_guia(
    State(state): State<AppState>,
    payload: Result<Json<GuideRequest>, JsonRejection>,
) -> Result<Json<GuideResponse>, ApiError> {
    let Json(req) = payload?;
    let message = sanitize_message(&req.message)?;
    Ok(Json(GuideResponse {
        response: state.guide.answer(&message).to_string(),
    }))
}

/// Simulated validation against external registries
///
/// POST /validate-data
pub async fn validate_data(
    State(state): State<AppState>,
    payload: Result<Json<ApplicantData>, JsonRejection>,
) -> Result<Json<BackendValidation>, ApiError> {
    let Json(data) = payload?;
    data.validate()?;
    tokio::time::sleep(state.simulation.validation_delay()).await;

    let result = BackendValidation::approve(&mut rand::thread_rng());
    tracing::info!(numero_solicitud = result.numero_solicitud, "Application approved");
    Ok(Json(result))
}

/// Simulated reverse geocoding of the applicant's position
///
/// POST /validate-address
pub async fn validate_address(
    State(state): State<AppState>,
    payload: Result<Json<LocationRequest>, JsonRejection>,
) -> Result<Json<AddressValidation>, ApiError> {
    let Json(req) = payload?;
    let coordinates = Coordinates::try_new(req.latitude, req.longitude)?;
    tokio::time::sleep(state.simulation.validation_delay()).await;

    let result = resolve_address(coordinates, &mut rand::thread_rng());
    tracing::info!(provincia = %result.address_components.provincia, "Address resolved");
    Ok(Json(result))
}

/// Exhaustive security assessment report
///
/// POST /test-exhaustive
pub async fn test_exhaustive(
    State(state): State<AppState>,
    client_ip: Option<Extension<ClientIp>>,
) -> Result<Json<AssessmentReport>, ApiError> {
    if let (Some(limiter), Some(Extension(ClientIp(ip)))) = (&state.rate_limiter, &client_ip) {
        RateLimitCheck::new(limiter.clone())
            .check_resource(ip, ASSESSMENT_RESOURCE)
            .await?;
    }

    let started = Instant::now();
    tokio::time::sleep(state.simulation.analysis_delay()).await;

    let analysis = state.scorer.score(&resumen(&SCENARIOS)).await?;
    let report = AssessmentReport::build(
        &SCENARIOS,
        analysis,
        SYSTEM_RECOMMENDATIONS,
        started.elapsed(),
        Timestamp::now(),
    );

    tracing::info!(
        scorer = state.scorer.name(),
        security_score = report.summary.security_score.value(),
        execution_time = %report.execution_time,
        "Security assessment completed"
    );
    Ok(Json(report))
}

/// Ten random applicant records run through the field rules
///
/// GET /test-automated
pub async fn test_automated() -> Json<AutomatedRun> {
    let run = run_automated_tests(&mut rand::thread_rng());
    tracing::info!(passed = run.passed, failed = run.failed, "Automated tests executed");
    Json(run)
}

/// Improvement catalogue
///
/// GET /recommendations
pub async fn recommendations() -> Json<RecommendationsResponse> {
    Json(RecommendationsResponse::catalogue(Timestamp::now()))
}

/// Plain contact form
///
/// POST /submit-form
pub async fn submit_form(
    payload: Result<Form<FormSubmission>, FormRejection>,
) -> Result<Json<SubmissionReceipt>, ApiError> {
    let Form(submission) = payload?;
    let submission = submission.validate()?;
    let receipt = submission.receive(&mut rand::thread_rng());
    tracing::info!(numero_solicitud = receipt.numero_solicitud, "Form submitted");
    Ok(Json(receipt))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// The body could not be read or parsed into the endpoint's shape.
    MalformedBody(String),
    Validation(ValidationError),
    RateLimited(RateLimitRejection),
    Scoring(ScoringError),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl From<RateLimitRejection> for ApiError {
    fn from(err: RateLimitRejection) -> Self {
        Self::RateLimited(err)
    }
}

impl From<ScoringError> for ApiError {
    fn from(err: ScoringError) -> Self {
        Self::Scoring(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MalformedBody(reason) => {
                tracing::debug!(%reason, "Malformed request body");
                let body = ErrorResponse::with_details(
                    ErrorCode::ValidationFailed,
                    "Cuerpo de la solicitud inválido",
                    serde_json::json!({ "reason": reason }),
                );
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::Validation(err) => {
                tracing::debug!(field = err.field(), error = %err, "Request rejected");
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::validation(&err))).into_response()
            }
            ApiError::RateLimited(rejection) => rejection.into_response(),
            ApiError::Scoring(err) => {
                tracing::error!(error = %err, "Security scoring failed");
                let body = ErrorResponse::new(
                    ErrorCode::ScoringFailed,
                    "No fue posible completar el análisis de seguridad",
                );
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
