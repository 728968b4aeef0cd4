pub mod routes;

use std::sync::Arc;

use axum::http::{Method, header};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use vogue_core::Config;

/// Read-only state shared by the handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Build the application router
pub fn app(config: Arc<Config>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(routes::home))
        .route("/chat", post(routes::chat))
        .nest_service("/static", ServeDir::new("static"))
        .layer(cors)
        .with_state(AppState { config })
}
