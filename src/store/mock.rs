//! In-memory strategy store for tests and demos.

use super::{StoreError, StrategyStore};
use crate::domain::PersistedPricingStrategy;
use async_trait::async_trait;

/// Store that serves a fixed list of strategies.
#[derive(Debug, Clone, Default)]
pub struct MockStrategyStore {
    strategies: Vec<PersistedPricingStrategy>,
    unavailable: Option<String>,
}

impl MockStrategyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a strategy; listing keeps insertion order.
    pub fn with_strategy(mut self, strategy: PersistedPricingStrategy) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Make every call fail with `StoreError::Unavailable`.
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.unavailable = Some(reason.into());
        self
    }

    fn check_available(&self) -> Result<(), StoreError> {
        match &self.unavailable {
            Some(reason) => Err(StoreError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl StrategyStore for MockStrategyStore {
    async fn list_strategies(&self) -> Result<Vec<PersistedPricingStrategy>, StoreError> {
        self.check_available()?;
        Ok(self.strategies.clone())
    }

    async fn get_strategy(&self, id: i64) -> Result<Option<PersistedPricingStrategy>, StoreError> {
        self.check_available()?;
        Ok(self.strategies.iter().find(|s| s.id == id).cloned())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_preserves_insertion_order() {
        let store = MockStrategyStore::new()
            .with_strategy(PersistedPricingStrategy::new(2, "b", json!({})))
            .with_strategy(PersistedPricingStrategy::new(1, "a", json!({})));

        let ids: Vec<i64> = store
            .list_strategies()
            .await
            .unwrap()
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_mock_get_by_id() {
        let store =
            MockStrategyStore::new().with_strategy(PersistedPricingStrategy::new(5, "e", json!({})));

        assert_eq!(store.get_strategy(5).await.unwrap().unwrap().engine, "e");
        assert!(store.get_strategy(6).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mock_failing() {
        let store = MockStrategyStore::new().failing("down");
        assert!(matches!(
            store.list_strategies().await,
            Err(StoreError::Unavailable(_))
        ));
    }
}
