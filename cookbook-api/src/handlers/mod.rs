//! HTTP handlers for the cookbook resources
//!
//! One generic implementation of list / get / create / update / delete,
//! instantiated per resource with [`resource_routes`]. Every request follows
//! the same pipeline:
//!
//! 1. **Validate** (POST, PUT): [`StrictJson`] enforces
//!    `Content-Type: application/json` and decodes the body strictly. Failures
//!    are [`ValidationError`]s: 415 for the content type, 400 for the body.
//! 2. **Invoke** the [`ResourceService`](crate::service::ResourceService).
//! 3. **Respond**: JSON payload for reads, a [`StatusMessage`] for writes, an
//!    empty 200 for deletes. Identifier parse failures and service failures
//!    take the generic error path through [`ApiError`].
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cookbook_api::handlers::resource_routes;
//! use cookbook_api::models::Recipe;
//! use cookbook_api::service::InMemoryService;
//!
//! let router = resource_routes::<Recipe, _>(Arc::new(InMemoryService::<Recipe>::new()));
//! ```

mod error;
mod resource;
mod response;
mod validation;

pub use error::{ApiError, ApiErrorKind, ApiOperation};
pub use resource::{create, delete, get_by_id, list, resource_routes, update};
pub use response::{StatusMessage, SUCCESS_MESSAGE};
pub use validation::{
    check_content_type, decode_draft, validate_draft, StrictJson, ValidationError,
    JSON_CONTENT_TYPE,
};
