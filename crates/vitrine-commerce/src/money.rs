//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The storefront is
//! single-currency, so there is no currency dimension.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A monetary value in cents.
///
/// Cart prices are never negative; the checked constructors uphold that, and
/// arithmetic in this crate only adds and scales non-negative values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Zero.
    pub const ZERO: Money = Money { cents: 0 };

    /// Create a Money value from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// Returns `None` when the amount is not a finite, non-negative number.
    /// This is the cart's input gate: NaN and friends stop here.
    ///
    /// ```
    /// use vitrine_commerce::money::Money;
    /// assert_eq!(Money::from_decimal(49.99), Some(Money::from_cents(4999)));
    /// assert_eq!(Money::from_decimal(f64::NAN), None);
    /// assert_eq!(Money::from_decimal(-1.0), None);
    /// ```
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        Some(Self::from_cents((amount * 100.0).round() as i64))
    }

    /// The amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Scale by a quantity.
    pub fn times(&self, quantity: u32) -> Money {
        Money::from_cents(self.cents.saturating_mul(i64::from(quantity)))
    }

    /// The amount with `percent` (0..=100) taken off, rounded half-up on the
    /// discounted portion.
    ///
    /// ```
    /// use vitrine_commerce::money::Money;
    /// assert_eq!(Money::from_cents(10000).percent_off(20), Money::from_cents(8000));
    /// assert_eq!(Money::from_cents(10000).percent_off(0), Money::from_cents(10000));
    /// ```
    pub fn percent_off(&self, percent: u8) -> Money {
        let off = (self.cents * i64::from(percent) + 50) / 100;
        Money::from_cents(self.cents - off)
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("${}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_cents(self.cents.saturating_add(other.cents))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal() {
        assert_eq!(Money::from_decimal(6.99), Some(Money::from_cents(699)));
        assert_eq!(Money::from_decimal(0.0), Some(Money::ZERO));
    }

    #[test]
    fn test_from_decimal_rejects_non_finite() {
        assert_eq!(Money::from_decimal(f64::NAN), None);
        assert_eq!(Money::from_decimal(f64::INFINITY), None);
        assert_eq!(Money::from_decimal(f64::NEG_INFINITY), None);
    }

    #[test]
    fn test_from_decimal_rejects_negative() {
        assert_eq!(Money::from_decimal(-0.01), None);
    }

    #[test]
    fn test_times() {
        let unit = Money::from_cents(699);
        assert_eq!(unit.times(5), Money::from_cents(3495));
    }

    #[test]
    fn test_percent_off() {
        let subtotal = Money::from_cents(10000);
        assert_eq!(subtotal.percent_off(20), Money::from_cents(8000));
        assert_eq!(subtotal.percent_off(10), Money::from_cents(9000));
        assert_eq!(subtotal.percent_off(100), Money::ZERO);
    }

    #[test]
    fn test_percent_off_rounds_half_up() {
        // 10% of $0.05 is half a cent; the discount rounds up to one cent.
        assert_eq!(Money::from_cents(5).percent_off(10), Money::from_cents(4));
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_cents(100), Money::from_cents(250)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_cents(350));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(4999).display(), "$49.99");
        assert_eq!(Money::from_cents(500).display(), "$5.00");
        assert_eq!(Money::ZERO.display(), "$0.00");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Money::from_cents(699)).unwrap();
        assert_eq!(json, "699");
        let back: Money = serde_json::from_str("699").unwrap();
        assert_eq!(back, Money::from_cents(699));
    }
}
