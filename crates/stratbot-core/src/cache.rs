//! In-memory caches owned by a [`crate::WorldBankClient`].
//!
//! Entries are write-once-per-key for the lifetime of the client: there is
//! no TTL, eviction or refresh. Concurrent first fetches of the same key may
//! both write; the later write replaces the earlier one wholesale, and since
//! both carry the same upstream result nothing observable changes.
//!
//! Locks are only held for the duration of a read or write, never across
//! a network await.

use std::collections::HashMap;
use std::sync::Arc;

use crate::schema::{Indicator, Topic};

#[derive(Debug, Default)]
struct CacheInner {
    topics: Option<Vec<Topic>>,
    indicators: HashMap<String, Vec<Indicator>>,
}

/// Topic list and indicators-by-topic-key caches.
#[derive(Debug, Clone, Default)]
pub struct WorldBankCache {
    inner: Arc<tokio::sync::RwLock<CacheInner>>,
}

impl WorldBankCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full topic collection, if it has been fetched.
    pub async fn topics(&self) -> Option<Vec<Topic>> {
        let store = self.inner.read().await;
        store.topics.clone()
    }

    pub async fn has_topics(&self) -> bool {
        let store = self.inner.read().await;
        store.topics.is_some()
    }

    pub async fn put_topics(&self, topics: Vec<Topic>) {
        let mut store = self.inner.write().await;
        store.topics = Some(topics);
    }

    /// Look up one topic in the cached collection.
    ///
    /// `None` when the collection is not cached; `Some(None)` when it is
    /// cached but holds no topic with that identifier.
    pub async fn find_topic(&self, id: &str) -> Option<Option<Topic>> {
        let store = self.inner.read().await;
        store
            .topics
            .as_ref()
            .map(|topics| topics.iter().find(|topic| topic.id == id).cloned())
    }

    /// Identifiers among `ids` that are absent from the cached topic collection.
    ///
    /// Empty when the collection has not been fetched yet.
    pub async fn unknown_topic_ids<'a>(&self, ids: &[&'a str]) -> Vec<&'a str> {
        let store = self.inner.read().await;
        match &store.topics {
            Some(topics) => ids
                .iter()
                .copied()
                .filter(|id| !topics.iter().any(|topic| topic.id == *id))
                .collect(),
            None => Vec::new(),
        }
    }

    pub async fn indicators(&self, key: &str) -> Option<Vec<Indicator>> {
        let store = self.inner.read().await;
        store.indicators.get(key).cloned()
    }

    /// Concatenate the cached lists for every key, or `None` if any key is missing.
    pub async fn concat_indicators(&self, keys: &[&str]) -> Option<Vec<Indicator>> {
        let store = self.inner.read().await;
        let mut merged = Vec::new();
        for key in keys {
            merged.extend(store.indicators.get(*key)?.iter().cloned());
        }
        Some(merged)
    }

    pub async fn put_indicators(&self, key: String, indicators: Vec<Indicator>) {
        let mut store = self.inner.write().await;
        store.indicators.insert(key, indicators);
    }

    /// Cached indicator keys, sorted.
    pub async fn indicator_keys(&self) -> Vec<String> {
        let store = self.inner.read().await;
        let mut keys = store.indicators.keys().cloned().collect::<Vec<_>>();
        keys.sort();
        keys
    }
}
