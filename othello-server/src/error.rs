use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use othello_rules::MoveError;
use serde_json::json;
use thiserror::Error;

/// Errors returned to HTTP clients as `{"detail": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error("Invalid JSON or Content-Length")]
    MalformedBody(#[source] serde_json::Error),

    #[error("Endpoint not found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Move(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "detail": self.to_string() }));
        (self.status(), body).into_response()
    }
}
