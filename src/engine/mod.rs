//! Pure computation engine for price totals.

pub mod calculator;

pub use calculator::{PriceCalculator, PriceOverflow};
