use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Fixed-point amount in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const SCALE: i64 = 100; // 2 decimal places
    pub const ZERO: Money = Money(0);

    #[cfg(test)]
    pub fn from_minor(cents: i64) -> Self {
        Self(cents)
    }

    pub fn is_negative(&self) -> bool {
        *self < Self::ZERO
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Rounds to whole cents, midpoints away from zero. `None` when the
    /// value does not fit.
    pub fn from_decimal(value: Decimal) -> Option<Self> {
        let cents = value
            .checked_mul(Decimal::ONE_HUNDRED)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        cents.to_i64().map(Self)
    }

    /// Parses plain (`12.5`) and scientific (`1.25e1`) notation without
    /// rounding. Digit separators (`1_000`) are rejected.
    pub fn parse_decimal(s: &str) -> Option<Decimal> {
        let s = s.trim();
        if s.is_empty() || s.contains('_') {
            return None;
        }
        Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .ok()
    }

    #[cfg(test)]
    pub fn from_decimal_str(s: &str) -> Option<Self> {
        Self::parse_decimal(s).and_then(Self::from_decimal)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let minor = self.0;
        let neg = minor < 0;
        let abs = minor.unsigned_abs();
        let int_part = abs / Self::SCALE as u64;
        let frac_part = abs % Self::SCALE as u64;
        if neg {
            write!(f, "-{}.{:02}", int_part, frac_part)
        } else {
            write!(f, "{}.{:02}", int_part, frac_part)
        }
    }
}
