//! Groq chat completions client
//!
//! Issues a single completion request per call: one system message carrying
//! the stylist persona, one user message carrying the raw input text. No
//! retries. Failures come back as typed [`CompletionError`] values so the
//! web layer can map each one to its own in-character apology.

use crate::config::CompletionConfig;
use crate::http::get_client;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{info, warn};

/// Request payload for the Groq chat completions API
#[derive(Debug, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub stream: bool,
}

impl CompletionRequest {
    /// Build the fixed two-message conversation for a user message
    pub fn for_message(message: &str, config: &CompletionConfig) -> Self {
        Self {
            model: config.model.clone(),
            messages: vec![
                Message::system(&config.system_prompt),
                Message::user(message),
            ],
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            top_p: config.top_p,
            stream: config.stream,
        }
    }
}

/// A message in the chat conversation
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Response from the Groq chat completions API
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
}

impl CompletionResponse {
    /// Get the content of the first choice, if available
    pub fn content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

/// A single response choice
#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// The message content in a response choice
#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Why a completion call produced no reply
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("GROQ_API_KEY is not configured")]
    MissingApiKey,
    #[error("request to Groq API failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Groq API error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Groq API returned no choices")]
    EmptyResponse,
}

/// Send one completion request and return the reply text verbatim
///
/// A missing or empty key fails fast without any network call. Everything
/// else is a single attempt against `config.api_url`.
pub async fn complete(
    message: &str,
    config: &CompletionConfig,
    api_key: Option<&str>,
) -> Result<String, CompletionError> {
    let api_key = match api_key {
        Some(key) if !key.trim().is_empty() => key,
        _ => return Err(CompletionError::MissingApiKey),
    };

    let client = get_client();
    let request = CompletionRequest::for_message(message, config);
    let start = Instant::now();

    let response = client
        .post(&config.api_url)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await
        .inspect_err(|err| {
            warn!(
                duration_ms = %start.elapsed().as_millis(),
                "Groq request failed: {}", err
            );
        })?;

    let duration_ms = start.elapsed().as_millis();

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        warn!(
            status = %status,
            duration_ms = %duration_ms,
            "Groq API error"
        );
        return Err(CompletionError::Api { status, body });
    }

    let result: CompletionResponse = response.json().await.inspect_err(|err| {
        warn!(
            duration_ms = %duration_ms,
            "Failed to parse Groq response: {}", err
        );
    })?;
    let content = match result.choices.into_iter().next() {
        Some(choice) => choice.message.content,
        None => return Err(CompletionError::EmptyResponse),
    };

    info!(
        model = %config.model,
        duration_ms = %duration_ms,
        "Completion call finished"
    );

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_carries_persona_and_user_text() {
        let config = CompletionConfig::default();
        let request = CompletionRequest::for_message("What Should I Wear?", &config);

        assert_eq!(request.model, config.model);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[0].content, config.system_prompt);
        assert_eq!(request.messages[1].role, "user");
        // User text goes out raw, not lowercased
        assert_eq!(request.messages[1].content, "What Should I Wear?");
        assert_eq!(request.temperature, 0.7);
        assert_eq!(request.max_tokens, 1024);
        assert!(!request.stream);
    }

    #[test]
    fn test_message_constructors() {
        let system = Message::system("You are helpful");
        assert_eq!(system.role, "system");

        let user = Message::user("Hello");
        assert_eq!(user.role, "user");
        assert_eq!(user.content, "Hello");
    }

    #[test]
    fn test_response_content_accessor() {
        let response: CompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"Try a silk scarf"},"finish_reason":"stop"}]}"#,
        )
        .unwrap();
        assert_eq!(response.content(), Some("Try a silk scarf"));

        let empty: CompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(empty.content(), None);
    }

    #[tokio::test]
    async fn test_missing_key_fails_fast() {
        let config = CompletionConfig::default();

        let err = complete("wedding outfit", &config, None).await.unwrap_err();
        assert!(matches!(err, CompletionError::MissingApiKey));

        let err = complete("wedding outfit", &config, Some("  "))
            .await
            .unwrap_err();
        assert!(matches!(err, CompletionError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_malformed_payload_is_transport_error() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        // Stub endpoint answering 200 with a body that isn't JSON
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let body = "definitely not json";
            let reply = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = socket.write_all(reply.as_bytes()).await;
        });

        let config = CompletionConfig {
            api_url: format!("http://{}/openai/v1/chat/completions", addr),
            ..CompletionConfig::default()
        };

        let err = complete("wedding outfit", &config, Some("test-key"))
            .await
            .unwrap_err();
        assert!(matches!(err, CompletionError::Transport(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let config = CompletionConfig {
            // Port 1 is unassigned; connect fails without leaving the host
            api_url: "http://127.0.0.1:1/openai/v1/chat/completions".to_string(),
            ..CompletionConfig::default()
        };

        let err = complete("wedding outfit", &config, Some("test-key"))
            .await
            .unwrap_err();
        assert!(matches!(err, CompletionError::Transport(_)));
    }
}
