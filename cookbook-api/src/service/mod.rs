//! Service abstraction the HTTP handlers delegate to
//!
//! - [`ResourceService`]: the five-operation capability set per resource
//! - [`ServiceError`]: classified failures the handlers map to status codes
//! - [`InMemoryService`]: map-backed implementation for local runs and tests

mod error;
mod memory;
mod traits;

pub use error::{ServiceError, ServiceErrorKind, ServiceResult};
pub use memory::InMemoryService;
pub use traits::ResourceService;
