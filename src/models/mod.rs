use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

pub mod account;
pub mod date;
pub mod transaction;

/// This type represents a monetary value normalized to exactly two decimal places, which is the
/// precision every recorded transaction and balance is expressed in.
///
/// Normalization happens once, at construction, using half-away-from-zero rounding. Everything
/// downstream (balances, statement lines, CSV export) can rely on the invariant instead of
/// re-rounding at each call site.
///
/// Remark: [std::ops::Deref] is not implemented on purpose. It would expose the entire api surface
/// of the underlying type, which would contradict the encapsulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Amount(value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    pub fn into_inner(self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

/// Renders the canonical two-decimal form, e.g. `15` becomes `"15.00"`.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
