// src/routes/mod.rs
pub mod chat;
pub mod docs;
pub mod health;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use docs::{openapi_json, redoc, swagger_ui};
use health::{health_check, root};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/chat", post(chat_handler))
        .route("/openapi.json", get(openapi_json))
        .route("/docs", get(swagger_ui))
        .route("/redoc", get(redoc))
        .layer(TraceLayer::new_for_http())
}

/// The full application: routes, shared metadata and the blanket CORS policy.
///
/// `very_permissive` mirrors the caller's origin, method and headers and
/// allows credentials, which is what "any origin with credentials" amounts to
/// once a browser is involved.
pub fn app(state: SharedState) -> Router {
    create_router()
        .with_state(state)
        .layer(CorsLayer::very_permissive())
}
