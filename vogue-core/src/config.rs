use std::net::SocketAddr;

use anyhow::{Context, Result};

/// Default chat model used when GROQ_MODEL env var is not set
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Groq chat completions endpoint
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default address the server binds to
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Persona prompt sent as the system message on every completion call
pub const SYSTEM_PROMPT: &str = "You are VogueAI, a high-end, trendy fashion stylist AI. Your goal is to provide personalized, stylish, and practical outfit advice. Use emojis to make the conversation lively. Keep your answers concise (around 2-3 sentences) unless asked for details. Be encouraging and confident in your tone.";

/// Fixed parameters for Groq completion calls
///
/// Built once at startup and shared read-only; tests override `api_url` to
/// point at a fault-injected endpoint.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub system_prompt: String,
    pub model: String,
    pub api_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub stream: bool,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            system_prompt: SYSTEM_PROMPT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            temperature: 0.7,
            max_tokens: 1024,
            top_p: 1.0,
            stream: false,
        }
    }
}

/// Application configuration from environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Missing key is non-fatal at startup; the chat handler answers with an
    /// in-character apology instead
    pub groq_api_key: Option<String>,
    pub bind_addr: SocketAddr,
    pub completion: CompletionConfig,
}

impl Config {
    /// Load configuration from .env file and environment
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Not an error if .env is missing

        let groq_api_key = std::env::var("GROQ_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("Invalid BIND_ADDR")?;

        let mut completion = CompletionConfig::default();
        if let Ok(model) = std::env::var("GROQ_MODEL") {
            completion.model = model;
        }

        Ok(Self {
            groq_api_key,
            bind_addr,
            completion,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_defaults() {
        let config = CompletionConfig::default();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.top_p, 1.0);
        assert!(!config.stream);
        assert!(config.system_prompt.starts_with("You are VogueAI"));
    }

    #[test]
    fn test_default_bind_addr_parses() {
        let addr: SocketAddr = DEFAULT_BIND_ADDR.parse().unwrap();
        assert_eq!(addr.port(), 5000);
    }
}
