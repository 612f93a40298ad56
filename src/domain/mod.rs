//! Domain types for the pricing core.
//!
//! This module provides:
//! - Exact monetary arithmetic via the Money wrapper
//! - PricingParameters, the typed pricing strategy document
//! - Boundary decoders for quote requests and stored strategies
//! - Stored and priced strategy records

pub mod decode;
pub mod money;
pub mod parameters;
pub mod strategy;

pub use decode::{
    decode_quote_request, decode_stored_strategy, DecodeError, FieldError, ValidationError,
    ValidationMode, QUOTE_LEAF_PATH, STORED_LEAF_PATH,
};
pub use money::{Money, MONEY_DP};
pub use parameters::{Extras, FabricPct, FlatExtra, PricingParameters};
pub use strategy::{PersistedPricingStrategy, PricedStrategy, Quote};
