//! Query-keyed catalog cache
//!
//! Card metadata is near-static, so successful lookups are kept for the
//! life of the process. Failures are not cached.

use super::{CardCatalog, CardRecord, CatalogError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Caches search results of an inner catalog by normalized query
pub struct CachedCatalog<C> {
    inner: C,
    entries: Arc<RwLock<HashMap<String, Vec<CardRecord>>>>,
}

impl<C: CardCatalog> CachedCatalog<C> {
    /// Wrap a catalog with an empty cache
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of cached queries
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

fn cache_key(query: &str) -> String {
    query.trim().to_lowercase()
}

#[async_trait]
impl<C: CardCatalog> CardCatalog for CachedCatalog<C> {
    async fn search_cards(&self, query: &str) -> Result<Vec<CardRecord>, CatalogError> {
        let key = cache_key(query);

        if let Some(cards) = self.entries.read().await.get(&key) {
            tracing::debug!(query = query, "Catalog cache hit");
            return Ok(cards.clone());
        }

        let cards = self.inner.search_cards(query).await?;
        self.entries.write().await.insert(key, cards.clone());
        Ok(cards)
    }
}
