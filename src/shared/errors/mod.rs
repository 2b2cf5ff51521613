//! Error Types
//!
//! Layered error types with HTTP status code mapping.
//! Clients only ever see fixed messages; internal detail goes to the log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned for every rejected request body
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Duplicate key: {0}")]
    Conflict(String),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: String, id: String },

    #[error("Failed to check id availability: {0}")]
    IdGeneration(#[source] RepositoryError),

    #[error("No free id found after {attempts} attempts")]
    IdSpaceExhausted { attempts: u32 },

    #[error("Insert kept conflicting on a freshly generated id after {attempts} attempts")]
    InsertConflicts { attempts: u32 },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::IdGeneration(_)
            | Self::IdSpaceExhausted { .. }
            | Self::InsertConflicts { .. }
            | Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the failure happened while picking an id rather than while writing
    #[must_use]
    pub fn is_id_generation(&self) -> bool {
        matches!(self, Self::IdGeneration(_) | Self::IdSpaceExhausted { .. })
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("{resource} not found")]
    NotFound { resource: String },

    /// A failure the client can't act on, reported with a fixed message
    #[error("{message}: {source}")]
    Internal {
        message: &'static str,
        #[source]
        source: UseCaseError,
    },
}

impl ApiError {
    /// Convert a use case failure, using `message` as the client-facing text for 500s
    #[must_use]
    pub fn from_use_case(error: UseCaseError, message: &'static str) -> Self {
        match error {
            UseCaseError::NotFound { resource, .. } => ApiError::NotFound {
                resource: resource.to_lowercase(),
            },
            source => ApiError::Internal { message, source },
        }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { source, .. } => source.status_code(),
        }
    }
}

/// Error body for client and server errors: `{"error": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Informational body, used for not-found and delete confirmations: `{"message": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            ApiError::BadRequest(detail) => {
                tracing::debug!(%detail, "Rejected request body");
                let body = ErrorResponse {
                    error: INVALID_BODY_MESSAGE.to_string(),
                };
                (status, Json(body)).into_response()
            }
            ApiError::NotFound { resource } => {
                let body = MessageResponse {
                    message: format!("{resource} not found"),
                };
                (status, Json(body)).into_response()
            }
            ApiError::Internal { message, source } => {
                tracing::error!(error = %source, "{}", message);
                let body = ErrorResponse {
                    error: message.to_string(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
