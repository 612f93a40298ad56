//! Monetary amount backed by rust_decimal.
//!
//! All price arithmetic runs in exact decimal; the only lossy step is the
//! final `round_half_up` to cents.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of decimal places a quoted total carries.
pub const MONEY_DP: u32 = 2;

/// Exact decimal amount used for price computation.
///
/// Serializes to a JSON number (not string).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Money {
    pub fn from_int(value: i64) -> Self {
        Money(Decimal::from(value))
    }

    /// Multiplier for a whole-number percentage: `(100 + pct) / 100`.
    ///
    /// The division is exact for any `i64` percentage.
    pub fn percent_factor(pct: i64) -> Self {
        Money((Decimal::from(pct) + Decimal::ONE_HUNDRED) / Decimal::ONE_HUNDRED)
    }

    /// `None` when the sum leaves the representable range.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// `None` when the product leaves the representable range.
    pub fn checked_mul(self, rhs: Money) -> Option<Money> {
        self.0.checked_mul(rhs.0).map(Money)
    }

    /// Round half away from zero to `dp` places, keeping `dp` as the scale.
    pub fn round_half_up(&self, dp: u32) -> Self {
        let mut rounded = self
            .0
            .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(dp);
        Money(rounded)
    }

    /// Number of digits after the decimal point as stored.
    pub fn scale(&self) -> u32 {
        self.0.scale()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s).map(Money)
    }
}

impl std::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}
