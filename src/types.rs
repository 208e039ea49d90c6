//! Core types and constants

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency identifier (e.g. "USD"), matched case-sensitively against rate sets
pub type CurrencyCode = String;

/// Field delimiter used by the record format
pub const DELIMITER: char = ';';

/// Fractional digits retained after a conversion or average division
pub const SCALE: u32 = 10;

/// A product listing: a name, a price in its native currency, and the
/// currency that price is denominated in.
///
/// Created by the record parser and treated as immutable afterwards.
/// Names are not required to be unique; prices are expected non-negative
/// but not validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name, not required unique
    pub name: String,
    /// Price in native currency units (exact decimal)
    pub price: Decimal,
    /// Native currency of the price
    pub currency: CurrencyCode,
}

impl Product {
    /// Create a new product
    pub fn new(name: impl Into<String>, price: Decimal, currency: impl Into<CurrencyCode>) -> Self {
        Self {
            name: name.into(),
            price,
            currency: currency.into(),
        }
    }

    /// Serialize back to the delimited record format (`name;price;currency`)
    ///
    /// Inverse of [`crate::parse::parse_product_with`]: re-parsing the
    /// returned record yields a field-equal product.
    pub fn to_record(&self, delimiter: char) -> String {
        format!(
            "{}{}{}{}{}",
            self.name, delimiter, self.price, delimiter, self.currency
        )
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.name, self.price, self.currency)
    }
}

/// An exchange rate entry: how many native-currency units equal one
/// reference-currency unit (divisor semantics, `reference = native / rate`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRate {
    /// Currency code this rate applies to
    pub code: CurrencyCode,
    /// Native units per one reference unit
    pub rate: Decimal,
}

impl CurrencyRate {
    /// Create a new rate entry
    pub fn new(code: impl Into<CurrencyCode>, rate: Decimal) -> Self {
        Self {
            code: code.into(),
            rate,
        }
    }

    /// Serialize back to the delimited record format (`code;rate`)
    pub fn to_record(&self, delimiter: char) -> String {
        format!("{}{}{}", self.code, delimiter, self.rate)
    }
}

impl fmt::Display for CurrencyRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.code, self.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_product_construction() {
        let price = Decimal::from_str("19.99").unwrap();
        let product = Product::new("Widget", price, "USD");

        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, price);
        assert_eq!(product.currency, "USD");
    }

    #[test]
    fn test_product_to_record() {
        let product = Product::new("Widget", Decimal::from_str("19.99").unwrap(), "USD");
        assert_eq!(product.to_record(DELIMITER), "Widget;19.99;USD");
    }

    #[test]
    fn test_rate_to_record() {
        let rate = CurrencyRate::new("EUR", Decimal::from_str("1.0").unwrap());
        assert_eq!(rate.to_record(DELIMITER), "EUR;1.0");
    }

    #[test]
    fn test_display() {
        let product = Product::new("Widget", Decimal::from_str("19.99").unwrap(), "USD");
        assert_eq!(format!("{}", product), "Widget (19.99 USD)");

        let rate = CurrencyRate::new("USD", Decimal::from_str("1.1").unwrap());
        assert_eq!(format!("{}", rate), "USD=1.1");
    }
}
