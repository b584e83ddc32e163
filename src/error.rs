use std::sync::OnceLock;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::error;

use crate::validation::ValidationErrors;

/// When on, error bodies carry the structured cause; off for anything
/// that is not a development deployment.
static DIAGNOSTIC_MODE: OnceLock<bool> = OnceLock::new();

pub fn set_diagnostic_mode(on: bool) {
    let _ = DIAGNOSTIC_MODE.set(on);
}

fn diagnostic_mode() -> bool {
    *DIAGNOSTIC_MODE.get().unwrap_or(&false)
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    #[error("{0}")]
    InvalidIdentifier(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    IdentifierMismatch(String),
    #[error("database operation failed")]
    Database(#[from] mongodb::error::Error),
    #[error("{0}")]
    Persistence(String),
}

impl ApiError {
    /// Malformed path identifier; the original API reports these as 404,
    /// not 400, and that split is kept.
    pub fn invalid_id(what: &str, raw: &str) -> Self {
        Self::InvalidIdentifier(format!(
            "Invalid {what} ID: {raw}. Id should have 24 hexadecimal characters."
        ))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::InvalidIdentifier(_) | Self::NotFound(_) | Self::IdentifierMismatch(_) => {
                StatusCode::NOT_FOUND
            }
            Self::Database(_) | Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> Value {
        match self {
            Self::Validation(errors) => json!(errors.violations()),
            Self::Database(e) => json!({ "detail": e.to_string() }),
            Self::Persistence(msg) => json!({ "detail": msg }),
            _ => json!({}),
        }
    }
}

/// `{message, error}` body shared by every failure response. The cause
/// detail is suppressed outside diagnostic mode.
pub fn error_body(message: &str, detail: Value, verbose: bool) -> Value {
    json!({
        "message": message,
        "error": if verbose { detail } else { json!({}) },
    })
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(%status, error = %self, "request failed");
        }
        let body = error_body(&self.to_string(), self.detail(), diagnostic_mode());
        (status, Json(body)).into_response()
    }
}
