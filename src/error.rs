//! Typed errors and HTTP mapping.

use crate::response::ErrorBody;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("unknown storage backend: {0}")]
    UnknownStorage(String),
}

/// Repository failure. Callers see only "absent" or "store failed".
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("row not found")]
    NotFound,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// `message` goes to the client; `source` only to the log.
    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    pub fn internal(message: impl Into<String>, source: StoreError) -> Self {
        AppError::Internal {
            message: message.into(),
            source,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest(m) | AppError::NotFound(m) => m,
            AppError::Internal { message, .. } => message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { message, source } = &self {
            tracing::error!(error = %source, "{}", message);
        }
        let body = ErrorBody {
            error: self.message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
