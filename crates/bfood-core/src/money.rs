//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The ordering API sends prices as JSON numbers: 10.9, 0.1, 40           │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Convert ONCE at the wire boundary (see [`major_units`]),             │
//! │    then every sum and product in the cart is exact.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bfood_core::money::Money;
//!
//! let price = Money::from_cents(1099); // 10.99
//! let line = price * 2;                // 21.98
//! assert_eq!((line + Money::from_cents(2)).cents(), 2200);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► CartItem.line_total ──► Cart.total ──► "R$ 25,00"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ```rust
    /// use bfood_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion, truncated toward zero.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a cart quantity, saturating at the `i64` bounds.
    ///
    /// ```rust
    /// use bfood_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Converts a price expressed in major units (as the API sends it).
    ///
    /// Rounds to the nearest cent. Returns `None` for NaN or infinities.
    pub fn from_major_units(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents > i64::MAX as f64 || cents < i64::MIN as f64 {
            return None;
        }
        Some(Money(cents as i64))
    }

    /// The value in major units, for writing back to the wire only.
    pub fn to_major_units(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal rendering (`-5.50`). Currency symbols and locale separators
/// are applied by the front end's display settings.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Saturating: totals of absurd backend prices pin at the bounds instead of
/// wrapping.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Wire Format
// =============================================================================

/// Serde adapter for prices sent as JSON numbers in major units.
///
/// ```rust
/// use bfood_core::money::{self, Money};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Priced {
///     #[serde(with = "money::major_units")]
///     price: Money,
/// }
///
/// let p: Priced = serde_json::from_str(r#"{ "price": 12.5 }"#).unwrap();
/// assert_eq!(p.price.cents(), 1250);
/// ```
pub mod major_units {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::Money;

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(money.to_major_units())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Money::from_major_units(value)
            .ok_or_else(|| de::Error::custom(format!("price {} is not a finite amount", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a * 3).cents(), 3000);

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_major_units(5e16).unwrap();
        assert_eq!(huge.cents(), 5_000_000_000_000_000_000);

        let max = Money::from_cents(i64::MAX);
        assert_eq!(huge * 2, max);
        assert_eq!(huge.multiply_quantity(u32::MAX), max);
        assert_eq!(huge + huge, max);

        let total: Money = vec![huge * 2, huge].into_iter().sum();
        assert_eq!(total, max);

        let min = Money::from_cents(i64::MIN);
        assert_eq!(min + Money::from_cents(-1), min);
    }

    #[test]
    fn test_from_major_units_rounds_to_nearest_cent() {
        assert_eq!(Money::from_major_units(40.0), Some(Money::from_cents(4000)));
        assert_eq!(Money::from_major_units(0.1), Some(Money::from_cents(10)));
        // 1.005 is stored as 1.00499999..., so it rounds down
        assert_eq!(Money::from_major_units(1.005), Some(Money::from_cents(100)));
        assert_eq!(Money::from_major_units(19.99), Some(Money::from_cents(1999)));
        assert_eq!(Money::from_major_units(f64::NAN), None);
        assert_eq!(Money::from_major_units(f64::INFINITY), None);
    }

    #[test]
    fn test_float_sums_are_exact_after_conversion() {
        let a = Money::from_major_units(0.1).unwrap();
        let b = Money::from_major_units(0.2).unwrap();
        assert_eq!((a + b).cents(), 30);
    }

    #[test]
    fn test_major_units_wire_round() {
        #[derive(Serialize, Deserialize)]
        struct Priced {
            #[serde(with = "major_units")]
            price: Money,
        }

        let parsed: Priced = serde_json::from_str(r#"{"price": 25}"#).unwrap();
        assert_eq!(parsed.price.cents(), 2500);

        let json = serde_json::to_string(&Priced { price: Money::from_cents(1250) }).unwrap();
        assert_eq!(json, r#"{"price":12.5}"#);
    }
}
