//! # cookbook-api
//!
//! HTTP resource handlers for a recipe-management service: meals, meal plans
//! and recipes, each exposed through the same list / get / create / update /
//! delete surface.
//!
//! ## Features
//!
//! - **Generic handlers**: one implementation per operation, instantiated per
//!   [`Resource`](models::Resource)
//! - **Strict bodies**: `Content-Type: application/json` enforced, unknown
//!   fields and mistyped fields rejected before the service is reached
//! - **Uniform errors**: every failure is a JSON `{status, message, code}`
//!   envelope
//! - **Middleware stack**: request ids, sensitive header masking, body
//!   limits, timeouts, CORS, compression, panic recovery
//! - **Graceful shutdown**: SIGTERM and SIGINT drain in-flight requests
//!
//! ## Example
//!
//! ```rust,no_run
//! use cookbook_api::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let app = in_memory_router(&config.service.name);
//!
//!     Server::new(config).serve(app).await
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod health;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod routes;
pub mod server;
pub mod service;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, MiddlewareConfig, ServiceConfig};
    pub use crate::error::{Error, Result};
    pub use crate::handlers::{
        resource_routes, ApiError, ApiErrorKind, ApiOperation, StatusMessage, StrictJson,
        ValidationError,
    };
    pub use crate::health::{health, HealthResponse};
    pub use crate::middleware::{
        request_id_layer, request_id_propagation_layer, sensitive_headers_layer,
        SENSITIVE_HEADERS,
    };
    pub use crate::models::{
        Ingredient, Meal, MealDraft, MealPlan, MealPlanDraft, MealPlanEntry, MealSlot, Recipe,
        RecipeDraft, Resource,
    };
    pub use crate::observability::init_tracing;
    pub use crate::routes::{in_memory_router, ApiRouter};
    pub use crate::server::Server;
    pub use crate::service::{
        InMemoryService, ResourceService, ServiceError, ServiceErrorKind, ServiceResult,
    };

    pub use axum::{
        extract::{Path, State},
        routing::{delete, get, post, put},
        Json, Router,
    };
    pub use serde::{Deserialize, Serialize};
}
