//! Status envelope written by write paths and failures
//!
//! GET paths return their payload directly as JSON. POST and PUT answer with
//! `{"status": 200, "message": "Success"}`, and every failure uses the same
//! shape with an added machine-readable `code`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Message written by successful create and update operations
pub const SUCCESS_MESSAGE: &str = "Success";

/// `{status, message, code?}` response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    /// HTTP status code, repeated in the body
    pub status: u16,

    /// Human-readable message
    pub message: String,

    /// Error code, present on failures only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl StatusMessage {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            code: None,
        }
    }

    /// 200 with the fixed success message
    pub fn success() -> Self {
        Self::new(StatusCode::OK, SUCCESS_MESSAGE)
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for StatusMessage {
    fn into_response(self) -> Response {
        // Json sets `content-type: application/json` before the body is written
        (self.status_code(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[test]
    fn test_success_body() {
        let message = StatusMessage::success();
        assert_eq!(message.status, 200);
        assert_eq!(message.message, "Success");

        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json, serde_json::json!({"status": 200, "message": "Success"}));
    }

    #[test]
    fn test_with_code_serializes_code() {
        let message = StatusMessage::new(StatusCode::NOT_FOUND, "recipe 1 not found")
            .with_code("NOT_FOUND");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["status"], 404);
    }

    #[test]
    fn test_into_response_sets_status_and_content_type() {
        let response = StatusMessage::new(StatusCode::UNSUPPORTED_MEDIA_TYPE, "nope").into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
