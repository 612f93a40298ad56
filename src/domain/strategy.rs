//! Stored pricing strategies and priced views over them.

use super::{Money, PricingParameters};
use serde::{Deserialize, Serialize};

/// A pricing strategy row as the store returns it.
///
/// `parameters` is the raw stored document, shaped
/// `{"parameters": {"parameters": {...}}}` for well-formed rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedPricingStrategy {
    pub id: i64,
    pub engine: String,
    pub parameters: serde_json::Value,
}

impl PersistedPricingStrategy {
    pub fn new(id: i64, engine: impl Into<String>, parameters: serde_json::Value) -> Self {
        Self {
            id,
            engine: engine.into(),
            parameters,
        }
    }
}

/// A stored strategy with its computed total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedStrategy {
    pub id: i64,
    pub engine: String,
    pub parameters: PricingParameters,
    pub sum: Money,
}

/// Result of pricing a caller-supplied document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub parameters: PricingParameters,
    pub sum: Money,
}
