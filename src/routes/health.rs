// src/routes/health.rs
use axum::{Json, extract::State};

use crate::{
    message::{HealthResponse, RootResponse},
    state::SharedState,
};

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: state.info.service_id.to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service name and where the docs live", body = RootResponse)
    )
)]
pub async fn root(State(state): State<SharedState>) -> Json<RootResponse> {
    Json(RootResponse {
        service: state.info.title.to_string(),
        docs: state.info.docs_path.to_string(),
    })
}
