// src/routes/chat.rs
use axum::Json;

use crate::{
    error::AppJson,
    message::{ChatRequest, ChatResponse, ErrorResponse},
    services::assistant::generate_reply,
};

#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Placeholder assistant reply", body = ChatResponse),
        (status = 422, description = "Body is not a JSON object", body = ErrorResponse)
    )
)]
pub async fn chat_handler(AppJson(payload): AppJson<ChatRequest>) -> Json<ChatResponse> {
    tracing::debug!(fields = payload.0.len(), "chat request received");
    Json(generate_reply(&payload))
}
