// src/routes/docs.rs
use axum::{Json, extract::State, response::Html};
use utoipa::OpenApi;

use crate::{
    message::{
        ChatRequest, ChatResponse, ErrorResponse, HealthResponse, RootResponse, ValidationIssue,
    },
    state::SharedState,
};

pub const OPENAPI_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        super::health::health_check,
        super::health::root,
        super::chat::chat_handler,
    ),
    components(schemas(
        ChatRequest,
        ChatResponse,
        HealthResponse,
        RootResponse,
        ErrorResponse,
        ValidationIssue
    ))
)]
pub struct ApiDoc;

pub async fn openapi_json(State(state): State<SharedState>) -> Json<utoipa::openapi::OpenApi> {
    let mut doc = ApiDoc::openapi();
    doc.info.title = state.info.title.to_string();
    doc.info.version = state.info.version.to_string();
    Json(doc)
}

// Swagger UI and ReDoc assets come from the jsdelivr CDN, nothing is bundled.
pub async fn swagger_ui(State(state): State<SharedState>) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<link type="text/css" rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
<title>{title} - Swagger UI</title>
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>
const ui = SwaggerUIBundle({{
    url: '{spec}',
    dom_id: '#swagger-ui',
    deepLinking: true,
}})
</script>
</body>
</html>"#,
        title = state.info.title,
        spec = OPENAPI_PATH,
    ))
}

pub async fn redoc(State(state): State<SharedState>) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>{title} - ReDoc</title>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1">
<style>body {{ margin: 0; padding: 0; }}</style>
</head>
<body>
<redoc spec-url="{spec}"></redoc>
<script src="https://cdn.jsdelivr.net/npm/redoc@2/bundles/redoc.standalone.js"></script>
</body>
</html>"#,
        title = state.info.title,
        spec = OPENAPI_PATH,
    ))
}
