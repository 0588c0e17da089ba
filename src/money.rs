//! Money type for representing monetary values.
//!
//! Uses a cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The storefront
//! trades in a single currency (USD), so no currency tag is carried.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

/// A monetary value in cents.
///
/// ```
/// use sneakpeak_commerce::money::Money;
/// let price = Money::from_dollars(49.99);
/// assert_eq!(price.cents(), 4999);
/// assert_eq!(price.display(), "$49.99");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero dollars.
    pub const ZERO: Money = Money(0);

    /// Create a Money value from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money value from a decimal dollar amount.
    pub fn from_dollars(amount: f64) -> Self {
        Self((amount * 100.0).round() as i64)
    }

    /// Amount in cents.
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Convert to a decimal dollar value.
    pub fn to_dollars(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if this is zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if this is positive.
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Multiply by a quantity.
    pub fn multiply(self, quantity: i64) -> Money {
        Money(self.0 * quantity)
    }

    /// Multiply by a decimal fraction, rounding to the nearest cent.
    ///
    /// Used for tax rates and percentage discounts.
    pub fn multiply_fraction(self, fraction: f64) -> Money {
        Money((self.0 as f64 * fraction).round() as i64)
    }

    /// Clamp negative amounts to zero.
    pub fn clamp_non_negative(self) -> Money {
        Money(self.0.max(0))
    }

    /// Format as a display string (e.g., "$49.99", "-$5.00").
    pub fn display(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, quantity: i64) -> Money {
        self.multiply(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
