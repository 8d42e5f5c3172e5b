//! Strict request body validation
//!
//! Write requests must declare `Content-Type: application/json` exactly and
//! carry a body that decodes into the target draft with no extra fields and
//! no type mismatches. Failures never reach the service.
//!
//! # Example
//!
//! ```rust
//! use axum::http::{header, HeaderMap, HeaderValue};
//! use cookbook_api::handlers::validate_draft;
//! use cookbook_api::models::MealDraft;
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
//!
//! let draft: MealDraft = validate_draft(&headers, br#"{"name":"Supper"}"#).unwrap();
//! assert_eq!(draft.name, "Supper");
//!
//! let err = validate_draft::<MealDraft>(&headers, br#"{"servings":"two"}"#).unwrap_err();
//! assert_eq!(err.field(), Some("servings"));
//! ```

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Request},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use thiserror::Error;

use super::response::StatusMessage;

/// The only accepted request content type, compared byte for byte
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Why a write request was rejected before reaching the service
#[derive(Debug, Error)]
pub enum ValidationError {
    /// `Content-Type` missing or not exactly `application/json`
    #[error("Content Type is not application/json")]
    UnsupportedMediaType,

    /// A field's JSON value does not fit its declared type
    #[error("Bad Request. Wrong Type provided for field {field}")]
    WrongType {
        /// Dotted path of the offending field
        field: String,
        #[source]
        source: serde_json::Error,
    },

    /// Any other decode failure (syntax, unknown field, trailing data)
    #[error("Bad Request {0}")]
    MalformedBody(#[source] serde_json::Error),

    /// The body could not be read at all
    #[error("{0}")]
    UnreadableBody(#[from] BytesRejection),
}

impl ValidationError {
    /// Status code this rejection is written with
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::WrongType { .. } | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::UnreadableBody(rejection) => rejection.status(),
        }
    }

    /// Machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            Self::WrongType { .. } => "WRONG_TYPE",
            Self::MalformedBody(_) => "MALFORMED_BODY",
            Self::UnreadableBody(_) => "UNREADABLE_BODY",
        }
    }

    /// The offending field, for type mismatches
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::WrongType { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!(
            status = status.as_u16(),
            code = self.error_code(),
            "Rejected request body: {}", self
        );
        StatusMessage::new(status, self.to_string())
            .with_code(self.error_code())
            .into_response()
    }
}

/// Require `Content-Type: application/json`, case-sensitive, no parameters
pub fn check_content_type(headers: &HeaderMap) -> Result<(), ValidationError> {
    match headers.get(header::CONTENT_TYPE) {
        Some(value) if value.as_bytes() == JSON_CONTENT_TYPE.as_bytes() => Ok(()),
        _ => Err(ValidationError::UnsupportedMediaType),
    }
}

/// Decode `body` into `T`, classifying failures
///
/// The body must hold exactly one JSON value.
pub fn decode_draft<T: DeserializeOwned>(body: &[u8]) -> Result<T, ValidationError> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let draft = serde_path_to_error::deserialize(&mut deserializer).map_err(classify)?;
    deserializer.end().map_err(ValidationError::MalformedBody)?;
    Ok(draft)
}

/// Content-type check followed by strict decoding
pub fn validate_draft<T: DeserializeOwned>(
    headers: &HeaderMap,
    body: &[u8],
) -> Result<T, ValidationError> {
    check_content_type(headers)?;
    decode_draft(body)
}

fn classify(err: serde_path_to_error::Error<serde_json::Error>) -> ValidationError {
    let field = err.path().to_string();
    let source = err.into_inner();

    // "." is the document root; a mismatch there names no field
    if field != "." && is_type_mismatch(&source) {
        ValidationError::WrongType { field, source }
    } else {
        ValidationError::MalformedBody(source)
    }
}

fn is_type_mismatch(err: &serde_json::Error) -> bool {
    if err.classify() != Category::Data {
        return false;
    }
    let message = err.to_string();
    message.starts_with("invalid type:") || message.starts_with("invalid value:")
}

/// JSON body extractor that applies [`validate_draft`]
///
/// The content type is checked before the body is buffered.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictJson<T>(pub T);

impl<T, S> FromRequest<S> for StrictJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        check_content_type(req.headers())?;
        let body = Bytes::from_request(req, state).await?;
        decode_draft(&body).map(StrictJson)
    }
}
