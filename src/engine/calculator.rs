//! Price total computation.

use crate::domain::{FlatExtra, Money, PricingParameters, MONEY_DP};
use thiserror::Error;

/// The total does not fit the decimal range (about 7.9e28).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("price total exceeds the representable range")]
pub struct PriceOverflow;

/// Computes the quoted total for a set of pricing parameters.
///
/// ```text
/// base     = pricePerMeter * (100 + marginPct) / 100
/// extras   = ottoman.count * ottoman.price + mechanism.count * mechanism.price
/// total    = (base + extras) * (100 + fabricPct.category) / 100
/// ```
///
/// Extras are never marked up, but the fabric surcharge applies to them.
/// The result is rounded half up to cents. Any intermediate value that
/// leaves the decimal range is reported as `PriceOverflow`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceCalculator;

impl PriceCalculator {
    pub fn compute(params: &PricingParameters) -> Result<Money, PriceOverflow> {
        let base = Money::from_int(params.price_per_meter)
            .checked_mul(Money::percent_factor(params.margin_pct))
            .ok_or(PriceOverflow)?;
        let extras = flat_cost(&params.extras.ottoman_flat)?
            .checked_add(flat_cost(&params.extras.mechanism_flat)?)
            .ok_or(PriceOverflow)?;
        let subtotal = base.checked_add(extras).ok_or(PriceOverflow)?;

        let total = subtotal
            .checked_mul(Money::percent_factor(params.fabric_pct.category))
            .ok_or(PriceOverflow)?;
        Ok(total.round_half_up(MONEY_DP))
    }
}

fn flat_cost(extra: &FlatExtra) -> Result<Money, PriceOverflow> {
    Money::from_int(extra.count)
        .checked_mul(Money::from_int(extra.price))
        .ok_or(PriceOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Extras, FabricPct};
    use std::str::FromStr;

    fn params(
        price_per_meter: i64,
        margin_pct: i64,
        fabric: i64,
        ottoman: (i64, i64),
        mechanism: (i64, i64),
    ) -> PricingParameters {
        PricingParameters {
            price_per_meter,
            margin_pct,
            fabric_pct: FabricPct { category: fabric },
            extras: Extras {
                ottoman_flat: FlatExtra::new(ottoman.0, ottoman.1),
                mechanism_flat: FlatExtra::new(mechanism.0, mechanism.1),
            },
        }
    }

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn test_reference_quote() {
        let p = params(100, 20, 10, (2, 50), (1, 30));
        assert_eq!(PriceCalculator::compute(&p).unwrap(), money("275.00"));
    }

    #[test]
    fn test_all_zero() {
        let total = PriceCalculator::compute(&PricingParameters::default()).unwrap();
        assert_eq!(total.to_string(), "0.00");
    }

    #[test]
    fn test_result_has_two_places() {
        let total = PriceCalculator::compute(&params(100, 20, 10, (2, 50), (1, 30))).unwrap();
        assert_eq!(total.scale(), 2);
        assert_eq!(total.to_string(), "275.00");
    }

    #[test]
    fn test_rounds_half_up() {
        // 1 * 1.05 * 1.30 = 1.365
        let total = PriceCalculator::compute(&params(1, 5, 30, (0, 0), (0, 0))).unwrap();
        assert_eq!(total, money("1.37"));
    }

    #[test]
    fn test_rounds_below_midpoint_down() {
        // 33 * 1.33 * 1.33 = 58.3737
        let total = PriceCalculator::compute(&params(33, 33, 33, (0, 0), (0, 0))).unwrap();
        assert_eq!(total, money("58.37"));
    }

    #[test]
    fn test_margin_does_not_apply_to_extras() {
        let total = PriceCalculator::compute(&params(0, 50, 0, (2, 50), (0, 0))).unwrap();
        assert_eq!(total, money("100"));
    }

    #[test]
    fn test_negative_inputs_are_computed_as_is() {
        let total = PriceCalculator::compute(&params(100, 0, 0, (-1, 40), (0, 0))).unwrap();
        assert_eq!(total, money("60"));
    }

    #[test]
    fn test_overflowing_extra_is_reported() {
        let p = params(100, 20, 10, (1_000_000_000_000_000, 1_000_000_000_000_000), (0, 0));
        assert_eq!(PriceCalculator::compute(&p), Err(PriceOverflow));
    }

    #[test]
    fn test_overflowing_surcharge_is_reported() {
        // Subtotal fits; the surcharge pushes it past the range.
        let p = params(0, 0, i64::MAX, (100_000_000_000_000, 100_000_000_000_000), (0, 0));
        assert_eq!(PriceCalculator::compute(&p), Err(PriceOverflow));
    }

    #[test]
    fn test_large_values_within_range() {
        let p = params(i64::MAX, 100, 100, (0, 0), (0, 0));
        assert!(PriceCalculator::compute(&p).is_ok());
    }
}
