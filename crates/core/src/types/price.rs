//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are plain decimal amounts. The currency a site charges in is a
//! presentation concern and lives beside the formatter, not inside every
//! price, so arithmetic between line items never has to reconcile codes.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A currency amount in the currency's standard unit (e.g. rupiah, dollars).
///
/// No sign check is applied: a negative amount is carried as given.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply by a quantity, saturating at the decimal range limits.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(Decimal::from(quantity)))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<i32> for Price {
    fn from(amount: i32) -> Self {
        Self(Decimal::from(amount))
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Self)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// ISO 4217 currency codes the site can label prices with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    IDR,
    USD,
    EUR,
    GBP,
    SGD,
}

impl CurrencyCode {
    /// The three-letter code shown in front of amounts.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::IDR => "IDR",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::SGD => "SGD",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IDR" => Ok(Self::IDR),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "SGD" => Ok(Self::SGD),
            _ => Err(format!("unsupported currency code: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_times_multiplies_by_quantity() {
        let price = Price::from(30_000);
        assert_eq!(price.times(2), Price::from(60_000));
        assert_eq!(price.times(0), Price::ZERO);
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::from(20_000), Price::from(15_000)].into_iter().sum();
        assert_eq!(total, Price::from(35_000));
    }

    #[test]
    fn test_display_normalizes_trailing_zeros() {
        let price: Price = "30000.00".parse().unwrap();
        assert_eq!(price.to_string(), "30000");

        let price: Price = "12.50".parse().unwrap();
        assert_eq!(price.to_string(), "12.5");
    }

    #[test]
    fn test_negative_amount_is_kept() {
        let price = Price::from(-5);
        assert_eq!(price.amount(), Decimal::from(-5));
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("abc".parse::<Price>().is_err());
    }

    #[test]
    fn test_currency_code_parse() {
        assert_eq!("idr".parse::<CurrencyCode>().unwrap(), CurrencyCode::IDR);
        assert_eq!(" USD ".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
        assert!("XYZ".parse::<CurrencyCode>().is_err());
    }

    #[test]
    fn test_currency_code_default_is_rupiah() {
        assert_eq!(CurrencyCode::default().to_string(), "IDR");
    }

    #[test]
    fn test_serde_transparent() {
        let price = Price::from(25_000);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"25000\"");
        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }
}
