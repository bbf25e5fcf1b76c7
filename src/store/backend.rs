use super::partitioner::Partitioner;
use crate::api::types::Review;

use async_trait::async_trait;
use dashmap::DashMap;
use thiserror::Error;

/// Failure reported by a key-value backend.
///
/// `code` carries the backend's raw signal string; the classifier decides
/// which client-facing category it belongs to.
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct BackendError {
    pub code: String,
    pub message: String,
}

impl BackendError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// The injected storage dependency.
///
/// Each method is a single round trip. Retry policy, if any, belongs to the
/// caller or the transport layer, never to an implementation of this trait.
#[async_trait]
pub trait KeyValueBackend: Send + Sync {
    /// Fetch every review stored under the given owner's partition key.
    async fn query(&self, owner: &str) -> Result<Vec<Review>, BackendError>;

    /// Unconditional upsert keyed by (owner, title).
    async fn put(&self, review: Review) -> Result<(), BackendError>;

    /// Remove the record under (owner, title), returning the prior value if
    /// one existed.
    async fn delete(&self, owner: &str, title: &str) -> Result<Option<Review>, BackendError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ReviewKey {
    owner: String,
    title: String,
}

/// In-process partitioned implementation of [`KeyValueBackend`].
///
/// Records live in per-partition maps keyed by (owner, title), with the
/// partition chosen by hashing the owner. Never reports transient failures.
pub struct MemoryBackend {
    partitions: DashMap<u32, DashMap<ReviewKey, Review>>,
    partitioner: Partitioner,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            partitions: DashMap::new(),
            partitioner: Partitioner::new(),
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueBackend for MemoryBackend {
    async fn query(&self, owner: &str) -> Result<Vec<Review>, BackendError> {
        let partition = self.partitioner.partition(owner);
        let mut items = Vec::new();
        if let Some(partition_map) = self.partitions.get(&partition) {
            for entry in partition_map.iter() {
                // Partitions hold every owner that hashes to them, so filter.
                if entry.key().owner == owner {
                    items.push(entry.value().clone());
                }
            }
        }
        Ok(items)
    }

    async fn put(&self, review: Review) -> Result<(), BackendError> {
        let partition = self.partitioner.partition(&review.owner);
        let key = ReviewKey {
            owner: review.owner.clone(),
            title: review.title.clone(),
        };
        let partition_map = self
            .partitions
            .entry(partition)
            .or_insert_with(DashMap::new);
        partition_map.insert(key, review);
        Ok(())
    }

    async fn delete(&self, owner: &str, title: &str) -> Result<Option<Review>, BackendError> {
        let partition = self.partitioner.partition(owner);
        let key = ReviewKey {
            owner: owner.to_string(),
            title: title.to_string(),
        };
        let prior = self
            .partitions
            .get(&partition)
            .and_then(|partition_map| partition_map.remove(&key).map(|(_, value)| value));
        Ok(prior)
    }
}
