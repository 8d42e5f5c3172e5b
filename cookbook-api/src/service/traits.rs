//! Service capability trait
//!
//! Uses RPITIT (Return Position Impl Trait In Traits) so implementors can
//! write plain `async fn` without `async_trait`.

use std::future::Future;

use super::error::ServiceResult;
use crate::models::Resource;

/// The five operations the HTTP layer may call for a resource
///
/// Implementations own persistence and business rules. Drafts handed to
/// `create` and `update` have already passed strict decoding.
///
/// # Example
///
/// ```rust,ignore
/// use cookbook_api::models::{Recipe, RecipeDraft};
/// use cookbook_api::service::{ResourceService, ServiceError, ServiceResult};
///
/// struct PgRecipes { pool: PgPool }
///
/// impl ResourceService<Recipe> for PgRecipes {
///     async fn get(&self, id: i64) -> ServiceResult<Recipe> {
///         fetch_recipe(&self.pool, id)
///             .await?
///             .ok_or_else(|| ServiceError::not_found("recipe", id))
///     }
///     // ... other methods
/// }
/// ```
pub trait ResourceService<R: Resource>: Send + Sync + 'static {
    /// Every item in the collection
    fn get_all(&self) -> impl Future<Output = ServiceResult<Vec<R::View>>> + Send;

    /// A single item
    ///
    /// # Errors
    ///
    /// `NotFound` if no item has this id.
    fn get(&self, id: i64) -> impl Future<Output = ServiceResult<R::View>> + Send;

    /// Store a new item
    fn create(&self, draft: R::Draft) -> impl Future<Output = ServiceResult<()>> + Send;

    /// Replace the item `id` with `draft`
    ///
    /// # Errors
    ///
    /// `NotFound` if no item has this id.
    fn update(&self, id: i64, draft: R::Draft) -> impl Future<Output = ServiceResult<()>> + Send;

    /// Remove the item `id`
    ///
    /// # Errors
    ///
    /// `NotFound` if no item has this id, including one deleted earlier.
    fn delete(&self, id: i64) -> impl Future<Output = ServiceResult<()>> + Send;
}
