//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use am_core::CoreError;
use am_session::SessionError;
use am_store::StoreError;
use am_warranty::WarrantyError;

use std::panic::Location;

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// No session, or credentials rejected (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Logged in but not allowed (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Unique constraint or state conflict (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Remote data store failure (502)
    #[error("Store error: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },

    /// Warranty API failure (502)
    #[error("Warranty error: {message} {location}")]
    Warranty {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        match self {
            ApiError::Store { .. } | ApiError::Warranty { .. } | ApiError::Internal { .. } => {
                log::error!("{}", self)
            }
            _ => log::debug!("{}", self),
        }

        let (status, code, message, field) = match self {
            ApiError::Unauthorized { message, .. } => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message, None)
            }
            ApiError::Forbidden { message, .. } => (StatusCode::FORBIDDEN, "FORBIDDEN", message, None),
            ApiError::NotFound { message, .. } => (StatusCode::NOT_FOUND, "NOT_FOUND", message, None),
            ApiError::Validation { message, field, .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message, field)
            }
            ApiError::Conflict { message, .. } => (StatusCode::CONFLICT, "CONFLICT", message, None),
            ApiError::Store { message, .. } => (StatusCode::BAD_GATEWAY, "STORE_ERROR", message, None),
            ApiError::Warranty { message, .. } => {
                (StatusCode::BAD_GATEWAY, "WARRANTY_ERROR", message, None)
            }
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                message,
                None,
            ),
            ApiError::BadRequest { message, .. } => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message, None)
            }
        };

        let body = ApiErrorBody {
            code: code.into(),
            message,
            field,
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Validation failures are reported against the offending form field
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::Validation {
            message: e.message(),
            field: e.field().map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if e.is_unique_violation() {
            return ApiError::Conflict {
                message: e.message(),
                location,
            };
        }

        match e {
            StoreError::NotFound { .. } => ApiError::NotFound {
                message: e.message(),
                location,
            },
            _ => ApiError::Store {
                message: e.message(),
                location,
            },
        }
    }
}

impl From<SessionError> for ApiError {
    #[track_caller]
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::Validation { source, .. } => ApiError::from(source),
            SessionError::Store { source, .. } => ApiError::from(source),
            _ => ApiError::Internal {
                message: e.message(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<WarrantyError> for ApiError {
    #[track_caller]
    fn from(e: WarrantyError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let message = e.message();

        match e {
            WarrantyError::NotAuthenticated { .. } | WarrantyError::TokenExpired { .. } => {
                ApiError::Unauthorized { message, location }
            }
            WarrantyError::Validation { field, .. } => ApiError::Validation {
                message,
                field: Some(field),
                location,
            },
            WarrantyError::InvalidStep { .. } => ApiError::Conflict { message, location },
            WarrantyError::Rejected { .. } => ApiError::BadRequest { message, location },
            _ => ApiError::Warranty { message, location },
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<MultipartError> for ApiError {
    #[track_caller]
    fn from(e: MultipartError) -> Self {
        ApiError::BadRequest {
            message: format!("Invalid upload: {}", e.body_text()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
