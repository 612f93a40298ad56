//! Storage abstraction for persisted pricing strategies.

use crate::domain::PersistedPricingStrategy;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

pub mod mock;

pub use mock::MockStrategyStore;

/// Read access to stored pricing strategies.
///
/// Implementations return records untouched; decoding the stored document
/// is the caller's job.
#[async_trait]
pub trait StrategyStore: Send + Sync + fmt::Debug {
    /// All stored strategies, in the store's natural order (id ascending).
    async fn list_strategies(&self) -> Result<Vec<PersistedPricingStrategy>, StoreError>;

    /// A single strategy by id, or `None` if no such record exists.
    async fn get_strategy(&self, id: i64) -> Result<Option<PersistedPricingStrategy>, StoreError>;

    /// Cheap reachability check behind `/ready`.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Error type for storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Unavailable("connection refused".to_string());
        assert_eq!(err.to_string(), "Storage unavailable: connection refused");

        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("Database error:"));
    }
}
