//! Service error types
//!
//! Services classify their own failures; the HTTP layer inspects only the
//! [`ServiceErrorKind`] and passes the message through untouched.
//!
//! # Example
//!
//! ```rust
//! use cookbook_api::service::{ServiceError, ServiceErrorKind};
//!
//! let error = ServiceError::not_found("recipe", 7);
//! assert!(matches!(error.kind, ServiceErrorKind::NotFound));
//! assert_eq!(error.to_string(), "recipe 7 not found");
//! ```

use std::fmt;

/// Result type for service operations
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Category of service error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceErrorKind {
    /// The addressed resource does not exist
    NotFound,
    /// The operation conflicts with current state
    Conflict,
    /// The draft is well-typed but violates a business rule
    Validation,
    /// Anything else
    Internal,
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::Conflict => write!(f, "conflict"),
            Self::Validation => write!(f, "validation"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

/// Classified failure returned by a [`ResourceService`](super::ResourceService)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    /// The category of error
    pub kind: ServiceErrorKind,
    /// Human-readable cause, shown to clients as-is
    pub message: String,
}

impl ServiceError {
    /// Create a new service error
    pub fn new(kind: ServiceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The resource `id` of type `resource` does not exist
    pub fn not_found(resource: &str, id: i64) -> Self {
        Self::new(ServiceErrorKind::NotFound, format!("{resource} {id} not found"))
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ServiceErrorKind::Conflict, message)
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ServiceErrorKind::Validation, message)
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ServiceErrorKind::Internal, message)
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ServiceErrorKind::NotFound
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ServiceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(ServiceErrorKind::NotFound.to_string(), "not_found");
        assert_eq!(ServiceErrorKind::Conflict.to_string(), "conflict");
        assert_eq!(ServiceErrorKind::Validation.to_string(), "validation");
        assert_eq!(ServiceErrorKind::Internal.to_string(), "internal");
    }

    #[test]
    fn test_not_found_message() {
        let error = ServiceError::not_found("meal plan", 42);
        assert!(error.is_not_found());
        assert_eq!(error.message, "meal plan 42 not found");
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(
            ServiceError::conflict("duplicate name").kind,
            ServiceErrorKind::Conflict
        );
        assert_eq!(
            ServiceError::validation("servings must be positive").kind,
            ServiceErrorKind::Validation
        );
        let internal = ServiceError::internal("disk full");
        assert_eq!(internal.kind, ServiceErrorKind::Internal);
        assert!(!internal.is_not_found());
    }

    #[test]
    fn test_display_is_message_only() {
        let error = ServiceError::conflict("recipe 3 is used by meal 9");
        assert_eq!(format!("{}", error), "recipe 3 is used by meal 9");
    }

    #[test]
    fn test_error_is_error_trait() {
        let error: Box<dyn std::error::Error> = Box::new(ServiceError::internal("boom"));
        assert_eq!(error.to_string(), "boom");
    }
}
