pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod engine;
pub mod error;
pub mod service;
pub mod store;

pub use config::{Config, PricingPolicy};
pub use db::{init_db, Repository};
pub use domain::{
    DecodeError, Money, PersistedPricingStrategy, PricedStrategy, PricingParameters, Quote,
    ValidationError, ValidationMode,
};
pub use engine::{PriceCalculator, PriceOverflow};
pub use error::AppError;
pub use service::{AdHocPricingService, ListingPolicy, StrategyCatalogService};
pub use store::{MockStrategyStore, StoreError, StrategyStore};
