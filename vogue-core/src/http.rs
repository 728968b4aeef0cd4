//! Shared HTTP client utilities
//!
//! One lazily-initialized reqwest client for all outbound calls. A single
//! client allows connection pooling, and carries the bounded timeout that
//! caps how long a chat request can hang on the Groq API.

use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;

/// Timeout for completion requests in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or create the shared HTTP client
pub fn get_client() -> &'static Client {
    HTTP_CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent("vogue-rs/1.0")
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client - this should never fail")
    })
}
