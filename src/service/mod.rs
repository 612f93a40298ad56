//! Request-scoped services wrapping the price calculator.

pub mod catalog;
pub mod quote;

pub use catalog::{CatalogError, CatalogListing, ListingPolicy, StrategyCatalogService};
pub use quote::AdHocPricingService;
