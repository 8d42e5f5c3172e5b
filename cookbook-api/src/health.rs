//! Liveness endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service name
    pub service: String,

    /// Version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// `GET /health`
///
/// Always returns 200 OK while the process is serving requests.
pub async fn health(State(service_name): State<Arc<str>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: service_name.to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    })
}

/// Router exposing [`health`] under `/health`
pub fn health_routes(service_name: &str) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(Arc::from(service_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_service_name() {
        let Json(response) = health(State(Arc::from("kitchen"))).await;
        assert_eq!(response.status, "healthy");
        assert_eq!(response.service, "kitchen");
        assert_eq!(response.version.as_deref(), Some(env!("CARGO_PKG_VERSION")));
    }
}
