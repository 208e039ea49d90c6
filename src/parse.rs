//! Record parser - delimited text lines to entities
//!
//! One record per line, fields separated by a single-character delimiter
//! (`;` by default). Fields are taken verbatim: no trimming, and no
//! validation of sign or magnitude, so negative or zero prices and rates
//! are accepted syntactically. Extra trailing fields are ignored; a line
//! with fewer fields than the record requires is a [`MalformedRecord`]
//! error, and a numeric field that is not a plain decimal literal is an
//! [`InvalidNumber`] error.
//!
//! [`MalformedRecord`]: crate::error::PriceStatsError::MalformedRecord
//! [`InvalidNumber`]: crate::error::PriceStatsError::InvalidNumber

use crate::error::{PriceStatsError, Result};
use crate::types::{CurrencyRate, Product, DELIMITER};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Fields in a product record: `name;price;currency`
const PRODUCT_FIELDS: usize = 3;
/// Fields in a rate record: `code;rate`
const RATE_FIELDS: usize = 2;

/// Parse a product record using the default `;` delimiter
pub fn parse_product(line: &str) -> Result<Product> {
    parse_product_with(line, DELIMITER)
}

/// Parse a product record (`name;price;currency`) with a custom delimiter
pub fn parse_product_with(line: &str, delimiter: char) -> Result<Product> {
    let fields = split_fields(line, delimiter, PRODUCT_FIELDS)?;
    let price = parse_decimal(fields[1], "price")?;
    Ok(Product::new(fields[0], price, fields[2]))
}

/// Parse a rate record using the default `;` delimiter
pub fn parse_rate(line: &str) -> Result<CurrencyRate> {
    parse_rate_with(line, DELIMITER)
}

/// Parse a rate record (`code;rate`) with a custom delimiter
pub fn parse_rate_with(line: &str, delimiter: char) -> Result<CurrencyRate> {
    let fields = split_fields(line, delimiter, RATE_FIELDS)?;
    let rate = parse_decimal(fields[1], "rate")?;
    Ok(CurrencyRate::new(fields[0], rate))
}

fn split_fields(line: &str, delimiter: char, expected: usize) -> Result<Vec<&str>> {
    let fields: Vec<&str> = line.split(delimiter).collect();
    if fields.len() < expected {
        return Err(PriceStatsError::MalformedRecord {
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

fn parse_decimal(value: &str, field: &'static str) -> Result<Decimal> {
    Decimal::from_str(value).map_err(|_| PriceStatsError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_product() {
        let product = parse_product("Widget;100.00;USD").unwrap();
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, Decimal::from_str("100.00").unwrap());
        assert_eq!(product.currency, "USD");
    }

    #[test]
    fn test_parse_rate() {
        let rate = parse_rate("EUR;1.0").unwrap();
        assert_eq!(rate.code, "EUR");
        assert_eq!(rate.rate, Decimal::from_str("1.0").unwrap());
    }

    #[test]
    fn test_parse_product_invalid_price() {
        let err = parse_product("X;abc;USD").unwrap_err();
        assert!(matches!(
            err,
            PriceStatsError::InvalidNumber { field: "price", .. }
        ));
    }

    #[test]
    fn test_parse_rate_invalid_rate() {
        let err = parse_rate("USD;1.2.3").unwrap_err();
        assert!(matches!(
            err,
            PriceStatsError::InvalidNumber { field: "rate", .. }
        ));
    }

    #[test]
    fn test_parse_product_too_few_fields() {
        let err = parse_product("Widget;100.00").unwrap_err();
        assert!(matches!(
            err,
            PriceStatsError::MalformedRecord {
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_parse_rate_empty_line() {
        let err = parse_rate("").unwrap_err();
        assert!(matches!(
            err,
            PriceStatsError::MalformedRecord {
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_extra_fields_ignored() {
        let product = parse_product("Widget;100.00;USD;leftover").unwrap();
        assert_eq!(product.currency, "USD");
    }

    #[test]
    fn test_no_trimming() {
        let err = parse_product("Widget ; 100.00;USD").unwrap_err();
        // " 100.00" is not a valid decimal literal without trimming
        assert!(matches!(err, PriceStatsError::InvalidNumber { .. }));

        let rate = parse_rate(" EUR;1.0").unwrap();
        assert_eq!(rate.code, " EUR");
    }

    #[test]
    fn test_negative_and_zero_accepted() {
        let product = parse_product("Refund;-5.00;USD").unwrap();
        assert!(product.price.is_sign_negative());

        let rate = parse_rate("USD;0").unwrap();
        assert!(rate.rate.is_zero());
    }

    #[test]
    fn test_custom_delimiter() {
        let product = parse_product_with("Widget|100.00|USD", '|').unwrap();
        assert_eq!(product.name, "Widget");
    }

    #[test]
    fn test_round_trip() {
        let line = "Widget;100.00;USD";
        let product = parse_product(line).unwrap();
        assert_eq!(product.to_record(DELIMITER), line);

        let line = "EUR;1.0";
        let rate = parse_rate(line).unwrap();
        assert_eq!(rate.to_record(DELIMITER), line);
    }
}
