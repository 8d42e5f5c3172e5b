//! Router assembly
//!
//! ```rust
//! use std::sync::Arc;
//! use cookbook_api::models::{Meal, MealPlan, Recipe};
//! use cookbook_api::routes::ApiRouter;
//! use cookbook_api::service::InMemoryService;
//!
//! let app = ApiRouter::new()
//!     .with_health("cookbook-api")
//!     .with_resource::<Meal, _>(Arc::new(InMemoryService::<Meal>::new()))
//!     .with_resource::<MealPlan, _>(Arc::new(InMemoryService::<MealPlan>::new()))
//!     .with_resource::<Recipe, _>(Arc::new(InMemoryService::<Recipe>::new()))
//!     .build();
//! ```

use std::sync::Arc;

use axum::Router;

use crate::handlers::resource_routes;
use crate::health::health_routes;
use crate::models::{Meal, MealPlan, Recipe, Resource};
use crate::service::{InMemoryService, ResourceService};

/// Builder that merges per-resource routers into one application router
#[derive(Debug, Default)]
pub struct ApiRouter {
    router: Router,
}

impl ApiRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount the five CRUD routes for `R`, served by `service`
    #[must_use]
    pub fn with_resource<R, S>(mut self, service: Arc<S>) -> Self
    where
        R: Resource,
        S: ResourceService<R>,
    {
        tracing::debug!(resource = R::NAME, path = R::PATH, "Mounting resource routes");
        self.router = self.router.merge(resource_routes::<R, S>(service));
        self
    }

    /// Mount `GET /health`
    #[must_use]
    pub fn with_health(mut self, service_name: &str) -> Self {
        self.router = self.router.merge(health_routes(service_name));
        self
    }

    pub fn build(self) -> Router {
        self.router
    }
}

/// Meals, meal plans and recipes, each backed by an empty [`InMemoryService`]
pub fn in_memory_router(service_name: &str) -> Router {
    ApiRouter::new()
        .with_health(service_name)
        .with_resource::<Meal, _>(Arc::new(InMemoryService::<Meal>::new()))
        .with_resource::<MealPlan, _>(Arc::new(InMemoryService::<MealPlan>::new()))
        .with_resource::<Recipe, _>(Arc::new(InMemoryService::<Recipe>::new()))
        .build()
}
