//! HTTP handlers for the chat widget
//!
//! Chat-flow failures never surface as 4xx/5xx: a missing message, a missing
//! API key, and a failed Groq call all come back as HTTP 200 with an
//! in-character reply, so the widget never shows a broken conversation.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use tracing::{error, warn};
use vogue_core::{advice, groq, ChatRequest, ChatResponse, CompletionError};

use crate::AppState;

/// Page served at the root route
const INDEX_TEMPLATE: &str = "templates/index.html";

/// GET / - serve the chat widget page
pub async fn home() -> Response {
    match tokio::fs::read_to_string(INDEX_TEMPLATE).await {
        Ok(page) => Html(page).into_response(),
        Err(err) => {
            error!("Failed to read {}: {}", INDEX_TEMPLATE, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(format!(
                    "<h1>Error rendering template</h1><p>{}</p>",
                    err
                )),
            )
                .into_response()
        }
    }
}

/// POST /chat - answer a styling question
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let Some(message) = request.message.as_deref().filter(|m| !m.is_empty()) else {
        return Json(ChatResponse::new(advice::EMPTY_MESSAGE_REPLY));
    };

    if let Some(reply) = advice::canned_reply(message) {
        return Json(ChatResponse::new(reply));
    }

    let config = &state.config;
    let reply = match groq::complete(
        message,
        &config.completion,
        config.groq_api_key.as_deref(),
    )
    .await
    {
        Ok(text) => text,
        Err(CompletionError::MissingApiKey) => {
            warn!("Chat request received but GROQ_API_KEY is not configured");
            advice::MISSING_KEY_REPLY.to_string()
        }
        Err(err) => {
            error!("Completion call failed: {}", err);
            advice::REMOTE_FAILURE_REPLY.to_string()
        }
    };

    Json(ChatResponse::new(reply))
}
