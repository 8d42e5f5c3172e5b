//! Generic error path for resource handlers
//!
//! Identifier parse failures and service failures both end up here as an
//! [`ApiError`], which picks the status code from its kind and writes the
//! underlying cause as the message. Body validation failures are handled
//! separately in [`super::validation`].
//!
//! # Example
//!
//! ```rust
//! use cookbook_api::handlers::{ApiError, ApiErrorKind, ApiOperation};
//! use cookbook_api::service::ServiceError;
//!
//! let error = ApiError::from(ServiceError::not_found("meal", 4))
//!     .with_operation(ApiOperation::Delete)
//!     .with_resource("meal");
//! assert_eq!(error.kind, ApiErrorKind::NotFound);
//! assert_eq!(error.message, "meal 4 not found");
//! ```

use std::fmt;
use std::num::ParseIntError;

use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::response::StatusMessage;
use crate::service::{ServiceError, ServiceErrorKind};

/// Operation being performed when the API error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    /// Listing the collection
    List,
    /// Getting a single item by id
    Get,
    /// Creating a new item
    Create,
    /// Replacing an existing item
    Update,
    /// Deleting an item
    Delete,
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Get => write!(f, "get"),
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Category of API error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// Path identifier is not a base-10 `i64`
    InvalidIdentifier,
    /// Resource was not found
    NotFound,
    /// Operation conflicts with current state
    Conflict,
    /// Service rejected a well-typed draft
    ValidationFailed,
    /// Internal server error
    InternalError,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIdentifier => write!(f, "invalid_identifier"),
            Self::NotFound => write!(f, "not_found"),
            Self::Conflict => write!(f, "conflict"),
            Self::ValidationFailed => write!(f, "validation_failed"),
            Self::InternalError => write!(f, "internal_error"),
        }
    }
}

impl ApiErrorKind {
    /// Get the HTTP status code for this error kind
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidIdentifier => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string for this error kind
    #[must_use]
    pub fn error_code(&self) -> String {
        self.to_string().to_uppercase()
    }
}

impl From<ServiceErrorKind> for ApiErrorKind {
    fn from(kind: ServiceErrorKind) -> Self {
        match kind {
            ServiceErrorKind::NotFound => Self::NotFound,
            ServiceErrorKind::Conflict => Self::Conflict,
            ServiceErrorKind::Validation => Self::ValidationFailed,
            ServiceErrorKind::Internal => Self::InternalError,
        }
    }
}

/// Error that reached the top of a handler operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The operation being performed when the error occurred
    pub operation: ApiOperation,
    /// The category of error
    pub kind: ApiErrorKind,
    /// Underlying cause, written to the response as-is
    pub message: String,
    /// Resource name (e.g. "meal plan")
    pub resource: Option<&'static str>,
}

impl ApiError {
    /// Create a new API error
    pub fn new(operation: ApiOperation, kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            resource: None,
        }
    }

    /// The path segment `raw` did not parse as an identifier
    pub fn invalid_identifier(operation: ApiOperation, raw: &str, cause: &ParseIntError) -> Self {
        Self::new(
            operation,
            ApiErrorKind::InvalidIdentifier,
            format!("invalid identifier {raw:?}: {cause}"),
        )
    }

    /// The path segment could not be decoded at all, e.g. invalid UTF-8
    pub fn unreadable_identifier(operation: ApiOperation, rejection: &PathRejection) -> Self {
        Self::new(
            operation,
            ApiErrorKind::InvalidIdentifier,
            format!("invalid identifier: {}", rejection.body_text()),
        )
    }

    /// Set the operation that caused the error
    #[must_use]
    pub fn with_operation(mut self, operation: ApiOperation) -> Self {
        self.operation = operation;
        self
    }

    /// Attach the resource name
    #[must_use]
    pub fn with_resource(mut self, resource: &'static str) -> Self {
        self.resource = Some(resource);
        self
    }

    /// Status code this error is written with
    pub fn status_code(&self) -> StatusCode {
        self.kind.status_code()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "API {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let Some(resource) = self.resource {
            write!(f, " [{resource}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::new(ApiOperation::Get, err.kind.into(), err.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(
                operation = %self.operation,
                kind = %self.kind,
                resource = ?self.resource,
                "API error: {}", self.message
            );
        } else {
            tracing::warn!(
                operation = %self.operation,
                kind = %self.kind,
                resource = ?self.resource,
                "API error: {}", self.message
            );
        }

        StatusMessage::new(status, self.message)
            .with_code(self.kind.error_code())
            .into_response()
    }
}
