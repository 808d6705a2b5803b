use std::error::Error as StdError;

use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::{
    dao::storage::StoreError, dto::scoreboard::ErrorResponse, state::scoreboard::ScoreError,
};

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage backend could not be read or written.
    #[error("storage unavailable")]
    Unavailable(#[source] StoreError),
    /// Invalid input provided by the client.
    #[error("{0}")]
    InvalidInput(String),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        ServiceError::Unavailable(err)
    }
}

impl From<ScoreError> for ServiceError {
    fn from(err: ScoreError) -> Self {
        ServiceError::InvalidInput(err.to_string())
    }
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request with invalid input.
    #[error("{0}")]
    BadRequest(String),
    /// Unexpected failure while serving an operation.
    #[error("{message}: {detail}")]
    Internal {
        /// Operation-level message shown to the client.
        message: &'static str,
        /// Rendered error chain of the underlying failure.
        detail: String,
    },
}

impl AppError {
    /// Map service failures for the operation described by `message`.
    ///
    /// Client mistakes keep their own text; anything else is reported as `message`
    /// with the underlying error chain attached.
    pub fn during(message: &'static str) -> impl Fn(ServiceError) -> AppError {
        move |err| match err {
            ServiceError::InvalidInput(text) => AppError::BadRequest(text),
            ServiceError::Unavailable(source) => AppError::Internal {
                message,
                detail: error_chain(&source),
            },
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Join an error and all of its sources into a single line.
fn error_chain(err: &dyn StdError) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        // Wrappers often repeat their source's text as their own message.
        let text = cause.to_string();
        if !rendered.ends_with(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = cause.source();
    }
    rendered
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    message,
                    error: None,
                },
            ),
            AppError::Internal { message, detail } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    message: message.to_string(),
                    error: Some(detail),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
