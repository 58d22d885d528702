//! Request and response bodies for the HTTP endpoints.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::assessment::{
    total_items, ItemStatus, PriorityDistribution, RecommendationCategory, CATALOGUE,
};
use crate::domain::foundation::{ErrorCode, Timestamp, ValidationError};
use crate::domain::wizard::{StateSnapshot, WizardReply};

// ════════════════════════════════════════════════════════════════════════════════
// Chat wizard
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Absent on the first message of a conversation. Kept untyped so a
    /// badly shaped state restarts the wizard instead of failing the request.
    #[serde(default, alias = "user_data")]
    pub state: Option<serde_json::Value>,
}

impl ChatRequest {
    /// The caller's state as a snapshot; an absent state is a new conversation.
    pub fn snapshot(&self) -> Result<StateSnapshot, ValidationError> {
        match &self.state {
            None | Some(serde_json::Value::Null) => Ok(StateSnapshot::default()),
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| ValidationError::invalid_format("state", e.to_string())),
        }
    }
}

/// State echoed back to the client, to be sent with the next message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireState {
    pub step: u8,
    pub waiting_for: Option<String>,
    pub collected: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub bot_message: String,
    pub new_state: WireState,
    pub start_validation: bool,
}

impl From<WizardReply> for ChatResponse {
    fn from(reply: WizardReply) -> Self {
        let start_validation = reply.start_validation();
        let snapshot = reply.state.to_snapshot();
        Self {
            bot_message: reply.bot_message,
            new_state: WireState {
                step: reply.state.step().number(),
                waiting_for: reply.state.waiting_for().map(|f| f.as_str().to_string()),
                collected: snapshot.collected,
            },
            start_validation,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Guide, location, health
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /chat-guia`.
#[derive(Debug, Clone, Deserialize)]
pub struct GuideRequest {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideResponse {
    pub response: String,
}

/// Body of `POST /validate-address`.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// Browser-provided hints; accepted but not used.
    #[serde(default)]
    pub address_components: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            message: "Servidor funcionando correctamente",
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Recommendations
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: &'static [RecommendationCategory],
    pub metadata: RecommendationsMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationsMetadata {
    pub total_categories: usize,
    pub total_items: usize,
    pub priority_distribution: PriorityDistribution,
    pub implementation_status: BTreeMap<&'static str, &'static str>,
    pub generated_at: Timestamp,
}

impl RecommendationsResponse {
    pub fn catalogue(generated_at: Timestamp) -> Self {
        Self {
            recommendations: &CATALOGUE,
            metadata: RecommendationsMetadata {
                total_categories: CATALOGUE.len(),
                total_items: total_items(&CATALOGUE),
                priority_distribution: PriorityDistribution::of(&CATALOGUE),
                implementation_status: ItemStatus::ALL
                    .iter()
                    .map(|s| (s.key(), s.label()))
                    .collect(),
                generated_at,
            },
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════════════════

/// Error body shared by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        code: ErrorCode,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: Some(details),
        }
    }

    /// Invalid input, naming the offending field.
    pub fn validation(err: &ValidationError) -> Self {
        Self::with_details(
            err.code(),
            err.to_string(),
            serde_json::json!({ "field": err.field() }),
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}
