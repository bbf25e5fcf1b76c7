use super::backend::{BackendError, KeyValueBackend};
use super::classify::{ErrorClass, classify};
use crate::api::types::Review;

use std::sync::Arc;
use thiserror::Error;

/// Domain-level outcome of a store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("review not found")]
    NotFound,
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    #[error("backend failure: {0}")]
    Internal(String),
}

impl From<BackendError> for StoreError {
    fn from(err: BackendError) -> Self {
        match classify(&err.code) {
            ErrorClass::Unavailable => StoreError::Unavailable(err.to_string()),
            ErrorClass::Internal => StoreError::Internal(err.to_string()),
        }
    }
}

/// Maps the review operations onto the key-value backend.
///
/// Each operation performs exactly one backend round trip and never retries.
pub struct ReviewStore {
    backend: Arc<dyn KeyValueBackend>,
}

impl ReviewStore {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    /// Fetch every review for one owner.
    ///
    /// An empty result set is reported as `NotFound`: the contract does not
    /// distinguish an unknown owner from an owner with zero reviews.
    pub async fn list(&self, owner: &str) -> Result<Vec<Review>, StoreError> {
        let reviews = self.backend.query(owner).await?;
        if reviews.is_empty() {
            return Err(StoreError::NotFound);
        }
        Ok(reviews)
    }

    /// Unconditional upsert keyed by (owner, title). Create and update both
    /// land here; the backend makes no distinction between them.
    pub async fn put(&self, review: Review) -> Result<(), StoreError> {
        self.backend.put(review).await?;
        Ok(())
    }

    /// Remove a review. `NotFound` when no record existed under the key,
    /// decided from the pre-deletion value the backend hands back.
    pub async fn delete(&self, owner: &str, title: &str) -> Result<(), StoreError> {
        match self.backend.delete(owner, title).await? {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound),
        }
    }
}
