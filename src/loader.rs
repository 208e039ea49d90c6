//! Line-source loading - entity lists from readers and files
//!
//! The core only consumes lines; these helpers adapt any `BufRead` (or a
//! file path) into parsed entity lists. Loading is strict: the first
//! malformed line aborts the whole load with its 1-based line number
//! attached, and an unreadable file is an `Io` error, never an
//! empty-but-valid result.

use crate::error::Result;
use crate::parse::{parse_product_with, parse_rate_with};
use crate::rates::RateSet;
use crate::types::{Product, DELIMITER};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read products from a line source using the default `;` delimiter
pub fn read_products<R: BufRead>(reader: R) -> Result<Vec<Product>> {
    read_products_with(reader, DELIMITER)
}

/// Read products from a line source with a custom delimiter
pub fn read_products_with<R: BufRead>(reader: R, delimiter: char) -> Result<Vec<Product>> {
    let mut products = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let product =
            parse_product_with(&line, delimiter).map_err(|e| e.at_line(index + 1))?;
        products.push(product);
    }
    log::debug!("loaded {} products", products.len());
    Ok(products)
}

/// Read a rate set from a line source using the default `;` delimiter
pub fn read_rates<R: BufRead>(reader: R) -> Result<RateSet> {
    read_rates_with(reader, DELIMITER)
}

/// Read a rate set from a line source with a custom delimiter
pub fn read_rates_with<R: BufRead>(reader: R, delimiter: char) -> Result<RateSet> {
    let mut rates = RateSet::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let rate = parse_rate_with(&line, delimiter).map_err(|e| e.at_line(index + 1))?;
        rates.push(rate);
    }
    log::debug!("loaded {} rates", rates.len());
    Ok(rates)
}

/// Load products from a file path
pub fn load_products_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Product>> {
    load_products_from_path_with(path, DELIMITER)
}

/// Load products from a file path with a custom delimiter
pub fn load_products_from_path_with<P: AsRef<Path>>(
    path: P,
    delimiter: char,
) -> Result<Vec<Product>> {
    let file = File::open(path)?;
    read_products_with(BufReader::new(file), delimiter)
}

/// Load a rate set from a file path
pub fn load_rates_from_path<P: AsRef<Path>>(path: P) -> Result<RateSet> {
    load_rates_from_path_with(path, DELIMITER)
}

/// Load a rate set from a file path with a custom delimiter
pub fn load_rates_from_path_with<P: AsRef<Path>>(path: P, delimiter: char) -> Result<RateSet> {
    let file = File::open(path)?;
    read_rates_with(BufReader::new(file), delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PriceStatsError;
    use std::io::Cursor;

    #[test]
    fn test_read_products() {
        let input = "Widget;100.00;USD\nGadget;50.00;EUR\n";
        let products = read_products(Cursor::new(input)).unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Widget");
        assert_eq!(products[1].name, "Gadget");
    }

    #[test]
    fn test_read_rates_preserves_order() {
        let input = "USD;1.1\nEUR;1.0\n";
        let rates = read_rates(Cursor::new(input)).unwrap();

        let codes: Vec<&str> = rates.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["USD", "EUR"]);
    }

    #[test]
    fn test_bad_line_aborts_with_line_number() {
        let input = "Widget;100.00;USD\nX;abc;USD\nGadget;50.00;EUR\n";
        let err = read_products(Cursor::new(input)).unwrap_err();

        match err {
            PriceStatsError::ParseAt { line, source } => {
                assert_eq!(line, 2);
                assert!(matches!(*source, PriceStatsError::InvalidNumber { .. }));
            }
            other => panic!("expected ParseAt, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_trailing_line_is_malformed() {
        // a trailing empty line is a record with too few fields, not noise
        let input = "USD;1.1\n\n";
        let err = read_rates(Cursor::new(input)).unwrap_err();
        assert!(matches!(err, PriceStatsError::ParseAt { line: 2, .. }));
    }

    #[test]
    fn test_empty_source_is_empty_list() {
        let products = read_products(Cursor::new("")).unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_products_from_path("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, PriceStatsError::Io(_)));
    }
}
