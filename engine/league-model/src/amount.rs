//! Money type for auction prices and franchise budgets
//!
//! League money is denominated in lakhs with two decimal places, so the
//! unit of account is one hundredth of a lakh ("cents"). All price
//! arithmetic is integer math on cents; decimals only appear at the
//! display boundary.

use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Amount represents a monetary value in cents (hundredths of a lakh)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount {
    /// Value in cents
    pub cents: i64,
}

impl Amount {
    pub const ZERO: Amount = Amount { cents: 0 };

    /// Create an amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create an amount from whole lakhs
    pub const fn from_lakhs(lakhs: i64) -> Self {
        Self { cents: lakhs * 100 }
    }

    pub fn to_cents(self) -> i64 {
        self.cents
    }

    /// Value as a decimal number of lakhs, always at cent scale
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.cents, 2)
    }

    /// Create from a decimal number of lakhs, truncating below cent precision
    pub fn from_decimal(decimal: Decimal) -> Self {
        let cents = (decimal * Decimal::from(100)).to_i64().unwrap_or(0);
        Self { cents }
    }

    pub fn is_zero(self) -> bool {
        self.cents == 0
    }

    pub fn is_negative(self) -> bool {
        self.cents < 0
    }

    /// Subtraction clamped at zero
    pub fn safe_sub(self, other: Self) -> Self {
        Self { cents: (self.cents - other.cents).max(0) }
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self { cents: self.cents + other.cents }
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self { cents: self.cents - other.cents }
    }
}

impl Mul<i64> for Amount {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        Self { cents: self.cents * rhs }
    }
}

impl Div<i64> for Amount {
    type Output = Self;

    fn div(self, rhs: i64) -> Self {
        Self { cents: self.cents / rhs }
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self { cents: -self.cents }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::ZERO
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}L", self.to_decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_creation() {
        let a = Amount::from_lakhs(50);
        assert_eq!(a.to_cents(), 5000);
        assert_eq!(Amount::from_cents(350).to_decimal().to_string(), "3.50");
    }

    #[test]
    fn amount_arithmetic() {
        let a = Amount::from_cents(500);
        let b = Amount::from_cents(130);

        assert_eq!(a + b, Amount::from_cents(630));
        assert_eq!(a - b, Amount::from_cents(370));
        assert_eq!(b * 3, Amount::from_cents(390));
        assert_eq!(a / 10, Amount::from_cents(50));
        assert_eq!(-b, Amount::from_cents(-130));
    }

    #[test]
    fn safe_subtraction_clamps_at_zero() {
        let a = Amount::from_cents(50);
        let b = Amount::from_cents(100);

        assert_eq!(a.safe_sub(b), Amount::ZERO);
        assert_eq!(b.safe_sub(a), Amount::from_cents(50));
    }

    #[test]
    fn display_in_lakhs() {
        assert_eq!(Amount::from_cents(1250).to_string(), "12.50L");
        assert_eq!(Amount::ZERO.to_string(), "0.00L");
    }

    #[test]
    fn sums_over_iterators() {
        let total: Amount =
            [Amount::from_cents(100), Amount::from_cents(250)].into_iter().sum();
        assert_eq!(total, Amount::from_cents(350));
    }
}
