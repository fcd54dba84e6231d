use super::types::{ChatReply, FulfillmentResponse};
use crate::llm::CompletionClient;
use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

pub const UNRECOGNIZED_REPLY: &str = "cannot parse message; send JSON with key 'message'";
pub const BUSY_REPLY: &str = "system is busy";
pub const BACKEND_ERROR_REPLY: &str = "backend system error";

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn CompletionClient>,
    pub prompt_prefix: String,
}

/// Classified shape of an inbound webhook payload.
#[derive(Debug, PartialEq)]
enum Inbound {
    /// Structured conversational-platform request.
    Platform { query: String },
    /// Plain web-chat request (`message` or `content`).
    Chat { message: String },
    /// Platform shape with the expected text field missing.
    Malformed,
    /// No recognizable key at all.
    Unrecognized,
}

/// Ordered shape detection, first match wins. The platform shape is checked
/// before the chat keys so a payload carrying both is treated as a platform
/// request.
fn classify(payload: &Value) -> Inbound {
    if let Some(query_result) = payload.get("queryResult") {
        return match query_result.get("queryText") {
            Some(text) => Inbound::Platform {
                query: text_of(text),
            },
            None => Inbound::Malformed,
        };
    }

    match payload.get("message").or_else(|| payload.get("content")) {
        Some(text) => Inbound::Chat {
            message: text_of(text),
        },
        None => Inbound::Unrecognized,
    }
}

// Chatboxes occasionally send numbers or nested objects; interpolate them
// as JSON instead of refusing the message.
fn text_of(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

/// Single webhook entry point for every chat integration.
///
/// Always answers HTTP 200 with a JSON body; failures are reported through
/// the body so existing integrations that only read fields keep working.
pub async fn webhook(State(state): State<AppState>, Json(payload): Json<Value>) -> Response {
    info!("Received webhook payload: {}", payload);

    match classify(&payload) {
        Inbound::Platform { query } => {
            info!("Source: platform | query: {}", query);
            let answer = state.answer(&query).await;
            Json(FulfillmentResponse::new(answer)).into_response()
        }
        Inbound::Chat { message } => {
            info!("Source: web chat | message: {}", message);
            let answer = state.answer(&message).await;
            Json(ChatReply::new(answer)).into_response()
        }
        Inbound::Malformed => {
            error!("Platform payload missing queryResult.queryText");
            Json(ChatReply::new(BACKEND_ERROR_REPLY)).into_response()
        }
        Inbound::Unrecognized => {
            info!("Source: unrecognized payload shape");
            Json(ChatReply::new(UNRECOGNIZED_REPLY)).into_response()
        }
    }
}

impl AppState {
    /// Runs the completion with the recruiting-assistant instruction prefix.
    /// Completion failures never escape the handler; the caller gets the
    /// apology string in the normal response shape.
    async fn answer(&self, question: &str) -> String {
        let prompt = format!("{} {}", self.prompt_prefix, question);
        match self.client.complete(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                error!("Completion request failed: {}", e);
                BUSY_REPLY.to_string()
            }
        }
    }
}
