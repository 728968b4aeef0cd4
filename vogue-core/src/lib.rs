pub mod advice;
pub mod config;
pub mod groq;
pub mod http;
pub mod models;

// Re-export commonly used types
pub use config::{CompletionConfig, Config};
pub use groq::CompletionError;
pub use models::{ChatRequest, ChatResponse};
