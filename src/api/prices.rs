use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::HeaderName;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use tracing::info;

use super::AppState;
use crate::domain::{PricedStrategy, Quote};
use crate::error::AppError;

/// Set on listing responses when malformed strategies were left out;
/// carries their ids, comma-separated.
pub const REJECTED_HEADER: HeaderName = HeaderName::from_static("x-rejected-strategies");

pub async fn list_prices(State(state): State<AppState>) -> Result<Response, AppError> {
    let listing = state.catalog.list_with_totals().await?;

    if listing.rejected.is_empty() {
        return Ok(Json(listing.entries).into_response());
    }

    let rejected_ids: Vec<String> = listing
        .rejected
        .iter()
        .map(|e| e.strategy_id.to_string())
        .collect();
    info!(?rejected_ids, "price listing served without malformed strategies");
    Ok((
        [(REJECTED_HEADER, rejected_ids.join(","))],
        Json(listing.entries),
    )
        .into_response())
}

pub async fn get_price(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<PricedStrategy>, AppError> {
    let Path(id) = path?;
    state
        .catalog
        .get_with_total(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Pricing strategy {} not found", id)))
}

pub async fn quote(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Quote>, AppError> {
    let Json(body) = payload?;
    let quote = state.quotes.quote_document(&body)?;
    Ok(Json(quote))
}
