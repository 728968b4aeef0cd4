use std::sync::Arc;

use anyhow::{Context, Result};
use vogue_core::Config;
use vogue_web::app;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Starting VogueAI stylist v{}", VERSION);

    let config = Config::from_env()?;
    if config.groq_api_key.is_none() {
        tracing::warn!("GROQ_API_KEY not set - styling questions outside the rule table will get a fallback reply");
    }

    let addr = config.bind_addr;
    let router = app(Arc::new(config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Server running at http://{}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}
