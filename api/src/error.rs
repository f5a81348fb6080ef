//! Unified error types for the Breed Catalog API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors, classified by `ErrorKind`
//! - `ImportError`: CSV bulk import errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::values::ValidationError;

/// Stable classification of a `DomainError`, used for programmatic branching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    NotFound,
    AlreadyExists,
    NothingTodo,
    Internal,
}

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("resource validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("resource not found error: {0}")]
    NotFound(String),

    #[error("resource already exists error: {0}")]
    AlreadyExists(String),

    /// The requested end state already holds
    #[error("nothing to do error")]
    NothingTodo,

    #[error("database error: {0}")]
    Database(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation(_) => ErrorKind::Validation,
            DomainError::NotFound(_) => ErrorKind::NotFound,
            DomainError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            DomainError::NothingTodo => ErrorKind::NothingTodo,
            DomainError::Database(_) | DomainError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// The validation cause, if this is a validation failure
    pub fn validation_cause(&self) -> Option<&ValidationError> {
        match self {
            DomainError::Validation(cause) => Some(cause),
            _ => None,
        }
    }
}

/// CSV bulk import errors
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("cannot read csv file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("csv record {line}: missing column {column}")]
    MissingColumn { line: u64, column: &'static str },

    #[error("csv record {line}: cannot convert {column} value '{value}'")]
    InvalidWeight {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("csv record {line}: {source}")]
    InvalidBreed {
        line: u64,
        #[source]
        source: DomainError,
    },
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(e) => match e.kind() {
                ErrorKind::Validation => (
                    StatusCode::BAD_REQUEST,
                    "Validation error",
                    e.validation_cause().map(ToString::to_string),
                ),
                ErrorKind::NotFound => (StatusCode::NOT_FOUND, "Not found", Some(e.to_string())),
                ErrorKind::AlreadyExists => {
                    (StatusCode::CONFLICT, "Already exists", Some(e.to_string()))
                }
                ErrorKind::NothingTodo => return StatusCode::NO_CONTENT.into_response(),
                ErrorKind::Internal => {
                    tracing::error!("Internal error: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error",
                        None,
                    )
                }
            },
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
