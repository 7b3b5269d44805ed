// src/error.rs
use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::message::{ErrorResponse, ValidationIssue};

#[derive(Debug, Error)]
pub enum AppError {
    /// The body could not be read as the expected JSON payload.
    #[error("invalid request body: {0}")]
    Validation(#[from] JsonRejection),

    #[error("request body is empty")]
    MissingBody,

    #[error("unsupported content type {0:?}")]
    UnsupportedContentType(String),
}

impl AppError {
    fn issue(&self) -> ValidationIssue {
        let (kind, msg) = match self {
            AppError::Validation(JsonRejection::JsonSyntaxError(err)) => {
                ("json_invalid", err.body_text())
            }
            AppError::Validation(JsonRejection::JsonDataError(err)) => {
                ("model_type", err.body_text())
            }
            AppError::Validation(rejection) => ("body_unreadable", rejection.body_text()),
            AppError::MissingBody => ("missing", "Field required".to_string()),
            AppError::UnsupportedContentType(_) => ("content_type", self.to_string()),
        };

        ValidationIssue {
            kind: kind.to_string(),
            loc: vec!["body".to_string()],
            msg,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let issue = self.issue();
        tracing::warn!(kind = %issue.kind, "rejected request body: {}", issue.msg);

        let body = ErrorResponse {
            detail: vec![issue],
        };
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

/// JSON body extractor whose rejections go through [`AppError`], so every bad
/// body answers 422 with a `{"detail": [...]}` list.
///
/// A request without `Content-Type` is still parsed as JSON; a request that
/// names any other media type is refused.
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        check_content_type(req.headers())?;

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(JsonRejection::from)?;
        if bytes.is_empty() {
            return Err(AppError::MissingBody);
        }

        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(Self(value))
    }
}

fn check_content_type(headers: &HeaderMap) -> Result<(), AppError> {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return Ok(());
    };

    let raw = value.to_str().unwrap_or_default();
    if is_json_media_type(raw) {
        Ok(())
    } else {
        Err(AppError::UnsupportedContentType(raw.to_string()))
    }
}

// `application/json`, `application/json; charset=utf-8`, `application/problem+json`
fn is_json_media_type(raw: &str) -> bool {
    let essence = raw.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}
