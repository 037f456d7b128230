//! # Money Module
//!
//! Provides the `Money` and `Rate` types for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In f64 arithmetic:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Discount chains make it worse:                                         │
//! │    5000.0 × 0.85 × 0.90 accumulates binary noise at every step          │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    Exact base-10 arithmetic with 28 significant digits                  │
//! │    5000 × 0.85 = 4250, bit-for-bit, every time                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use strata_core::money::Money;
//!
//! let unit_price = Money::from_major(100);
//! let total = unit_price.multiply_quantity(50);
//! assert_eq!(total, Money::new(Decimal::from(5000)));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::ConfigViolation;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary amount as an exact decimal value.
///
/// ## Design Decisions
/// - **`Decimal` (signed)**: Allows negative values for refunds, credits
/// - **Single field tuple struct**: Zero-cost abstraction over `Decimal`
/// - **Derives**: Full serde support plus total ordering, so "the lowest
///   resulting price" is a plain `Iterator::min`
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  unit price ──► multiply_quantity ──► original total                    │
/// │                                            │                            │
/// │                        rule.apply(total, qty) per selected rule         │
/// │                                            │                            │
/// │                                            ▼                            │
/// │                                      final price                        │
/// │                                                                         │
/// │  EVERY monetary value in the engine flows through this type             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from an exact decimal amount.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use strata_core::money::Money;
    ///
    /// let price = Money::new(Decimal::new(1999, 2)); // 19.99
    /// assert_eq!(price.amount(), Decimal::new(1999, 2));
    /// ```
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from whole major units (e.g. dollars).
    ///
    /// ## Example
    /// ```rust
    /// use strata_core::money::Money;
    ///
    /// let price = Money::from_major(100);
    /// assert_eq!(price.to_string(), "$100.00");
    /// ```
    #[inline]
    pub fn from_major(units: i64) -> Self {
        Money(Decimal::from(units))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use strata_core::money::Money;
    ///
    /// let unit_price = Money::from_major(100);
    /// let original_total = unit_price.multiply_quantity(50);
    /// assert_eq!(original_total, Money::from_major(5000));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Applies a discount rate: `amount − amount·rate`.
    ///
    /// The discount amount is computed first and then subtracted, keeping
    /// the arithmetic order identical for every rule so repeated
    /// application stays exact.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use strata_core::money::{Money, Rate};
    ///
    /// let subtotal = Money::from_major(5000);
    /// let rate = Rate::new(Decimal::new(15, 2)).unwrap(); // 0.15
    /// assert_eq!(subtotal.apply_rate(rate), Money::from_major(4250));
    /// ```
    pub fn apply_rate(&self, rate: Rate) -> Money {
        let discount_amount = self.0 * rate.value();
        Money(self.0 - discount_amount)
    }
}

// =============================================================================
// Money Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and utility output. Hosts format prices themselves
/// to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}${:.2}", sign, self.0.abs().round_dp(2))
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Rate Type
// =============================================================================

/// A discount rate restricted to the interval [0, 1].
///
/// ## Why a Newtype?
/// A raw `Decimal` can hold 1.5 or -0.2; a `Rate` cannot. [`Rate::new`] is
/// the only way to obtain one, so every rate inside a configured rule has
/// already been range-checked. Call-time code never re-validates.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use strata_core::money::Rate;
///
/// let ten_percent = Rate::new(Decimal::new(10, 2)).unwrap();
/// assert_eq!(ten_percent.to_string(), "10%");
///
/// assert!(Rate::new(Decimal::from(2)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rate(Decimal);

impl Rate {
    /// Creates a rate, rejecting values outside [0, 1].
    pub fn new(value: Decimal) -> Result<Self, ConfigViolation> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(ConfigViolation::RateOutOfRange { rate: value });
        }
        Ok(Rate(value))
    }

    /// The zero rate (no discount).
    #[inline]
    pub const fn zero() -> Self {
        Rate(Decimal::ZERO)
    }

    /// Returns the underlying decimal value.
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// True when applying this rate changes nothing.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

/// Display shows the rate as a percentage ("15%" for 0.15).
impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.0 * Decimal::ONE_HUNDRED).normalize())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_construction() {
        let money = Money::new(dec!(19.99));
        assert_eq!(money.amount(), dec!(19.99));
        assert_eq!(Money::from_major(100).amount(), dec!(100));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::new(dec!(10.99))), "$10.99");
        assert_eq!(format!("{}", Money::from_major(5)), "$5.00");
        assert_eq!(format!("{}", Money::new(dec!(-5.5))), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
        // Sub-cent amounts round for display only
        assert_eq!(format!("{}", Money::new(dec!(28.3305))), "$28.33");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(10);
        let b = Money::new(dec!(2.50));

        assert_eq!(a + b, Money::new(dec!(12.50)));
        assert_eq!(a - b, Money::new(dec!(7.50)));
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::new(dec!(2.99));
        assert_eq!(unit_price.multiply_quantity(3), Money::new(dec!(8.97)));
        assert_eq!(unit_price.multiply_quantity(0), Money::zero());
    }

    #[test]
    fn test_apply_rate_is_exact() {
        let subtotal = Money::from_major(5000);
        let fifteen = Rate::new(dec!(0.15)).unwrap();
        assert_eq!(subtotal.apply_rate(fifteen), Money::from_major(4250));

        // The classic float-killer: 10% of 0.3
        let odd = Money::new(dec!(0.3));
        let ten = Rate::new(dec!(0.1)).unwrap();
        assert_eq!(odd.apply_rate(ten), Money::new(dec!(0.27)));
    }

    #[test]
    fn test_apply_zero_rate_is_identity() {
        let amount = Money::new(dec!(123.45));
        assert_eq!(amount.apply_rate(Rate::zero()), amount);
    }

    #[test]
    fn test_apply_full_rate_is_free() {
        let amount = Money::from_major(100);
        let full = Rate::new(dec!(1)).unwrap();
        assert_eq!(amount.apply_rate(full), Money::zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_major(1);
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::new(dec!(-1));
        assert!(negative.is_negative());
        assert_eq!(negative.abs(), positive);
    }

    #[test]
    fn test_ordering_picks_lowest_price() {
        let prices = vec![
            Money::from_major(4500),
            Money::from_major(4250),
            Money::from_major(5000),
        ];
        assert_eq!(prices.into_iter().min(), Some(Money::from_major(4250)));
    }

    #[test]
    fn test_rate_bounds() {
        assert!(Rate::new(dec!(0)).is_ok());
        assert!(Rate::new(dec!(0.5)).is_ok());
        assert!(Rate::new(dec!(1)).is_ok());

        assert!(matches!(
            Rate::new(dec!(-0.01)),
            Err(ConfigViolation::RateOutOfRange { .. })
        ));
        assert!(matches!(
            Rate::new(dec!(1.01)),
            Err(ConfigViolation::RateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::new(dec!(0.05)).unwrap().to_string(), "5%");
        assert_eq!(Rate::new(dec!(0.10)).unwrap().to_string(), "10%");
        assert_eq!(Rate::new(dec!(0.125)).unwrap().to_string(), "12.5%");
        assert_eq!(Rate::zero().to_string(), "0%");
    }

    #[test]
    fn test_money_serde_round_trip() {
        let price = Money::new(dec!(3825));
        let json = serde_json::to_string(&price).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }
}
