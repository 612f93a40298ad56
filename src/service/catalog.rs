//! Priced listing of stored pricing strategies.

use crate::domain::{
    decode_stored_strategy, DecodeError, PersistedPricingStrategy, PricedStrategy,
    ValidationError, ValidationMode, STORED_LEAF_PATH,
};
use crate::engine::PriceCalculator;
use crate::store::{StoreError, StrategyStore};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// What the listing does with a record whose document fails to decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListingPolicy {
    /// Leave the record out, report it, keep going.
    #[default]
    SkipInvalid,
    /// Fail the whole listing on the first bad record.
    Abort,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Priced strategies plus the records that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogListing {
    pub entries: Vec<PricedStrategy>,
    pub rejected: Vec<DecodeError>,
}

#[derive(Debug, Clone)]
pub struct StrategyCatalogService {
    store: Arc<dyn StrategyStore>,
    validation: ValidationMode,
    policy: ListingPolicy,
}

impl StrategyCatalogService {
    pub fn new(
        store: Arc<dyn StrategyStore>,
        validation: ValidationMode,
        policy: ListingPolicy,
    ) -> Self {
        Self {
            store,
            validation,
            policy,
        }
    }

    /// Price every stored strategy, in store order.
    pub async fn list_with_totals(&self) -> Result<CatalogListing, CatalogError> {
        let records = self.store.list_strategies().await?;
        let mut listing = CatalogListing {
            entries: Vec::with_capacity(records.len()),
            rejected: Vec::new(),
        };

        for record in &records {
            match price_record(record, self.validation) {
                Ok(priced) => listing.entries.push(priced),
                Err(e) if self.policy == ListingPolicy::SkipInvalid => {
                    warn!(
                        strategy_id = e.strategy_id,
                        engine = %e.engine,
                        fields = ?e.source.fields(),
                        "skipping malformed pricing strategy"
                    );
                    listing.rejected.push(e);
                }
                Err(e) => return Err(e.into()),
            }
        }

        debug!(
            priced = listing.entries.len(),
            rejected = listing.rejected.len(),
            "priced strategy catalog"
        );
        Ok(listing)
    }

    pub async fn ping_store(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }

    /// Price a single stored strategy. `None` if the id is unknown.
    ///
    /// A malformed record is always an error here, whatever the listing policy.
    pub async fn get_with_total(&self, id: i64) -> Result<Option<PricedStrategy>, CatalogError> {
        match self.store.get_strategy(id).await? {
            Some(record) => Ok(Some(price_record(&record, self.validation)?)),
            None => Ok(None),
        }
    }
}

fn price_record(
    record: &PersistedPricingStrategy,
    validation: ValidationMode,
) -> Result<PricedStrategy, DecodeError> {
    let parameters = decode_stored_strategy(record, validation)?;
    let sum = PriceCalculator::compute(&parameters).map_err(|_| DecodeError {
        strategy_id: record.id,
        engine: record.engine.clone(),
        source: ValidationError::total_overflow(STORED_LEAF_PATH),
    })?;
    Ok(PricedStrategy {
        id: record.id,
        engine: record.engine.clone(),
        parameters,
        sum,
    })
}
