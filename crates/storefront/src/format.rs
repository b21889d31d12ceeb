//! Price formatting for display.

use restaurantly_core::{CurrencyCode, Price};

use crate::config::PricingConfig;

/// Formats prices as `<CODE> <amount>`, e.g. `IDR 60000` or `IDR 60.000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceFormatter {
    currency: CurrencyCode,
    thousands_separator: Option<char>,
}

impl PriceFormatter {
    #[must_use]
    pub const fn new(currency: CurrencyCode, thousands_separator: Option<char>) -> Self {
        Self {
            currency,
            thousands_separator,
        }
    }

    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Format a price, trailing fractional zeros dropped.
    #[must_use]
    pub fn format(&self, price: Price) -> String {
        format!("{} {}", self.currency.code(), self.amount(price))
    }

    /// Format only the amount, without the currency code.
    #[must_use]
    pub fn amount(&self, price: Price) -> String {
        let plain = price.to_string();
        match self.thousands_separator {
            Some(separator) => group_digits(&plain, separator),
            None => plain,
        }
    }
}

impl From<&PricingConfig> for PriceFormatter {
    fn from(config: &PricingConfig) -> Self {
        Self::new(config.currency, config.thousands_separator)
    }
}

/// Insert `separator` every three digits of the integer part.
///
/// The fractional part is kept as-is after a `.`, or after a `,` when the
/// grouping separator is itself a `.`.
fn group_digits(plain: &str, separator: char) -> String {
    let (sign, unsigned) = plain
        .strip_prefix('-')
        .map_or(("", plain), |rest| ("-", rest));
    let (integer, fraction) = unsigned
        .split_once('.')
        .map_or((unsigned, None), |(int, frac)| (int, Some(frac)));

    let digits = integer.len();
    let mut out = String::with_capacity(plain.len() + digits / 3);
    out.push_str(sign);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        out.push(if separator == '.' { ',' } else { '.' });
        out.push_str(fraction);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_without_grouping() {
        let formatter = PriceFormatter::default();
        assert_eq!(formatter.format(Price::from(60_000)), "IDR 60000");
        assert_eq!(formatter.format(Price::ZERO), "IDR 0");
    }

    #[test]
    fn test_format_with_dot_grouping() {
        let formatter = PriceFormatter::new(CurrencyCode::IDR, Some('.'));
        assert_eq!(formatter.format(Price::from(60_000)), "IDR 60.000");
        assert_eq!(formatter.format(Price::from(1_250_000)), "IDR 1.250.000");
        assert_eq!(formatter.format(Price::from(999)), "IDR 999");
    }

    #[test]
    fn test_format_with_comma_grouping_and_fraction() {
        let formatter = PriceFormatter::new(CurrencyCode::USD, Some(','));
        let price: Price = "1234567.50".parse().unwrap();
        assert_eq!(formatter.format(price), "USD 1,234,567.5");
    }

    #[test]
    fn test_dot_grouping_uses_decimal_comma() {
        let formatter = PriceFormatter::new(CurrencyCode::IDR, Some('.'));
        let price: Price = "12500.25".parse().unwrap();
        assert_eq!(formatter.amount(price), "12.500,25");
    }

    #[test]
    fn test_negative_amount() {
        let formatter = PriceFormatter::new(CurrencyCode::IDR, Some('.'));
        assert_eq!(formatter.amount(Price::from(-1_000)), "-1.000");
    }

    #[test]
    fn test_from_pricing_config() {
        let config = PricingConfig {
            currency: CurrencyCode::SGD,
            thousands_separator: Some(','),
        };
        let formatter = PriceFormatter::from(&config);
        assert_eq!(formatter.currency(), CurrencyCode::SGD);
        assert_eq!(formatter.format(Price::from(12_000)), "SGD 12,000");
    }
}
