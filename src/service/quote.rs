//! Price previews for documents that are not stored.

use crate::domain::{
    decode_quote_request, PricingParameters, Quote, ValidationError, ValidationMode,
    QUOTE_LEAF_PATH,
};
use crate::engine::PriceCalculator;
use serde_json::Value;

/// Prices caller-supplied parameters. Never reads or writes the store.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdHocPricingService {
    validation: ValidationMode,
}

impl AdHocPricingService {
    pub fn new(validation: ValidationMode) -> Self {
        Self { validation }
    }

    /// Price already-decoded parameters, echoing them back.
    ///
    /// A total outside the decimal range is a validation failure on the
    /// whole leaf document.
    pub fn quote(&self, parameters: PricingParameters) -> Result<Quote, ValidationError> {
        let sum = PriceCalculator::compute(&parameters)
            .map_err(|_| ValidationError::total_overflow(QUOTE_LEAF_PATH))?;
        Ok(Quote { parameters, sum })
    }

    /// Decode a `{"parameters": {...}}` request body and price it.
    pub fn quote_document(&self, body: &Value) -> Result<Quote, ValidationError> {
        let parameters = decode_quote_request(body, self.validation)?;
        self.quote(parameters)
    }
}
