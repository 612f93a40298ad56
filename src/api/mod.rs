pub mod health;
pub mod prices;

use crate::config::PricingPolicy;
use crate::service::{AdHocPricingService, StrategyCatalogService};
use crate::store::StrategyStore;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub catalog: StrategyCatalogService,
    pub quotes: AdHocPricingService,
}

impl AppState {
    pub fn new(store: Arc<dyn StrategyStore>, pricing: PricingPolicy) -> Self {
        Self {
            catalog: StrategyCatalogService::new(store, pricing.validation, pricing.listing),
            quotes: AdHocPricingService::new(pricing.validation),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/api/v1/prices", get(prices::list_prices))
        .route("/api/v1/prices/quote", post(prices::quote))
        .route("/api/v1/prices/:id", get(prices::get_price))
        .layer(cors)
        .with_state(state)
}
