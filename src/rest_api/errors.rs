//! # REST API Errors
//!
//! Error types for the customer endpoints and their HTTP mapping.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::model::field_messages;
use crate::store::StoreError;

use super::response::Envelope;

/// Result type for REST handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// REST API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body or path failed validation; storage was never called
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Axum refused the request before it reached a handler
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// No customer with the requested id
    #[error("{message}")]
    NotFound { message: String },

    /// The store reported a failure
    #[error("{message}: {detail}")]
    Storage { message: String, detail: String },
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
        }
    }

    /// Build a mapper that tags a store failure with what was being attempted.
    ///
    /// ```ignore
    /// service.list_all().await.map_err(ApiError::storage("Error querying the database"))?;
    /// ```
    pub fn storage(message: &'static str) -> impl FnOnce(StoreError) -> ApiError {
        move |err| ApiError::Storage {
            message: message.to_string(),
            detail: err.to_string(),
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Rejected { status, .. } => *status,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(field_messages(&errors))
    }
}

// Rejections keep axum's status: 400 for bad syntax, 415 for a missing
// JSON content type, 413 for an oversized body.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<ApiError> for Envelope {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Validation(errors) => Envelope::invalid(errors),
            ApiError::Rejected { message, .. } => Envelope::invalid(vec![message]),
            ApiError::NotFound { message } => Envelope::message(message),
            ApiError::Storage { message, detail } => Envelope::failure(message, detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }

        (status, Json(Envelope::from(self))).into_response()
    }
}
