//! Error types for the service and HTTP layers.
//!
//! `NotFound` is the only outcome a well-formed request can end in besides
//! success; it never originates inside the service, which reports a missing
//! id as `None`. `Internal` is reserved for genuine faults and exposes the
//! fault text to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::response::Envelope;

/// Faults raised while executing a service operation.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("id space exhausted: no further todo ids can be assigned")]
    IdSpaceExhausted,

    #[error("duplicate todo id {0}")]
    DuplicateId(u64),
}

/// Everything a handler or extractor can answer with instead of success.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid id param: {0}. Id must be a number.")]
    InvalidId(String),

    #[error("Invalid ToDo object. Expected format: {{ task: string, completed: boolean }}")]
    InvalidBody,

    #[error("Todo(#{0}) not found.")]
    NotFound(String),

    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("Method {method} not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn not_found(id: u64) -> Self {
        Self::NotFound(id.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidId(_) | Self::InvalidBody => StatusCode::BAD_REQUEST,
            Self::NotFound(_) | Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let Self::Internal(message) = &self {
            error!(%message, "request failed");
        }
        (status, Json(Envelope::failure(status, self.to_string()))).into_response()
    }
}
