//! Pricing strategy inputs.

use serde::{Deserialize, Serialize};

/// Inputs of a single pricing strategy.
///
/// Every field is required. Use `decode::decode_quote_request` or
/// `decode::decode_stored_strategy` to build one from untrusted JSON so
/// that missing or mistyped fields are reported with their path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingParameters {
    /// Base price per linear meter of material.
    pub price_per_meter: i64,
    /// Markup on the base cost, in percent.
    pub margin_pct: i64,
    pub fabric_pct: FabricPct,
    pub extras: Extras,
}

/// Fabric-grade surcharge, applied to base cost plus extras.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FabricPct {
    pub category: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extras {
    pub ottoman_flat: FlatExtra,
    pub mechanism_flat: FlatExtra,
}

/// Add-on charged at `count * price`, never marked up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatExtra {
    pub count: i64,
    pub price: i64,
}

impl FlatExtra {
    pub fn new(count: i64, price: i64) -> Self {
        Self { count, price }
    }
}

impl PricingParameters {
    /// Every leaf value with its JSON path, relative to the leaf document.
    pub fn leaves(&self) -> [(&'static str, i64); 7] {
        [
            ("pricePerMeter", self.price_per_meter),
            ("marginPct", self.margin_pct),
            ("fabricPct.category", self.fabric_pct.category),
            ("extras.ottomanFlat.count", self.extras.ottoman_flat.count),
            ("extras.ottomanFlat.price", self.extras.ottoman_flat.price),
            ("extras.mechanismFlat.count", self.extras.mechanism_flat.count),
            ("extras.mechanismFlat.price", self.extras.mechanism_flat.price),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_to_canonical_leaf_shape() {
        let params = PricingParameters {
            price_per_meter: 100,
            margin_pct: 20,
            fabric_pct: FabricPct { category: 10 },
            extras: Extras {
                ottoman_flat: FlatExtra::new(2, 50),
                mechanism_flat: FlatExtra::new(1, 30),
            },
        };

        let value = serde_json::to_value(params).unwrap();
        assert_eq!(
            value,
            json!({
                "pricePerMeter": 100,
                "marginPct": 20,
                "fabricPct": { "category": 10 },
                "extras": {
                    "ottomanFlat": { "count": 2, "price": 50 },
                    "mechanismFlat": { "count": 1, "price": 30 }
                }
            })
        );
    }

    #[test]
    fn test_leaves_cover_every_field() {
        let params = PricingParameters::default();
        let paths: Vec<&str> = params.leaves().iter().map(|(p, _)| *p).collect();
        assert_eq!(paths.len(), 7);
        assert!(paths.contains(&"extras.mechanismFlat.price"));
    }
}
