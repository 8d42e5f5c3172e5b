//! In-process [`ResourceService`] backed by a map
//!
//! Stands in for the real persistence layer when running the binary locally
//! and in tests. Ids are allocated from 1 upwards and never reused.

use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicI64, Ordering};

use tokio::sync::RwLock;

use super::error::{ServiceError, ServiceResult};
use super::traits::ResourceService;
use crate::models::Resource;

/// Map-backed store for one resource type
pub struct InMemoryService<R: Resource> {
    items: RwLock<BTreeMap<i64, R::Draft>>,
    next_id: AtomicI64,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> InMemoryService<R> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            _resource: PhantomData,
        }
    }

    /// Build a store pre-populated with `drafts`, assigned ids 1..=n
    pub fn with_items(drafts: impl IntoIterator<Item = R::Draft>) -> Self {
        let mut items = BTreeMap::new();
        let mut next_id = 1;
        for draft in drafts {
            items.insert(next_id, draft);
            next_id += 1;
        }
        Self {
            items: RwLock::new(items),
            next_id: AtomicI64::new(next_id),
            _resource: PhantomData,
        }
    }

    /// Number of stored items
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl<R: Resource> Default for InMemoryService<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> ResourceService<R> for InMemoryService<R> {
    async fn get_all(&self) -> ServiceResult<Vec<R::View>> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .map(|(id, draft)| R::view(*id, draft.clone()))
            .collect())
    }

    async fn get(&self, id: i64) -> ServiceResult<R::View> {
        let items = self.items.read().await;
        items
            .get(&id)
            .map(|draft| R::view(id, draft.clone()))
            .ok_or_else(|| ServiceError::not_found(R::NAME, id))
    }

    async fn create(&self, draft: R::Draft) -> ServiceResult<()> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.items.write().await.insert(id, draft);
        tracing::debug!(resource = R::NAME, id, "Created item");
        Ok(())
    }

    async fn update(&self, id: i64, draft: R::Draft) -> ServiceResult<()> {
        let mut items = self.items.write().await;
        let slot = items
            .get_mut(&id)
            .ok_or_else(|| ServiceError::not_found(R::NAME, id))?;
        *slot = draft;
        Ok(())
    }

    async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.items
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| ServiceError::not_found(R::NAME, id))
    }
}
