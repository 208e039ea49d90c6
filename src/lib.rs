//! # pricestats
//!
//! Reference-currency valuation statistics over `;`-delimited product and
//! exchange-rate data.
//!
//! Two record formats feed the library: product listings
//! (`name;price;currency`) and exchange rates (`code;rate`, where `rate`
//! is native-currency units per one reference-currency unit). Prices are
//! converted into the reference currency by exact decimal division at a
//! fixed scale of ten digits (round-half-up), then reduced into four
//! statistics: total value, average value, most valuable product, least
//! valuable product.
//!
//! All arithmetic uses `rust_decimal` - never IEEE floats - so results are
//! reproducible bit-for-bit.
//!
//! ## Example
//!
//! ```rust
//! use pricestats::prelude::*;
//!
//! let products = vec![
//!     parse_product("Widget;100.00;USD").unwrap(),
//!     parse_product("Gadget;50.00;EUR").unwrap(),
//! ];
//! let rates: RateSet = ["USD;1.1", "EUR;1.0"]
//!     .iter()
//!     .map(|line| parse_rate(line).unwrap())
//!     .collect();
//!
//! let total = sum_in_reference(&products, &rates).unwrap();
//! let expected: Decimal = "140.9090909091".parse().unwrap();
//! assert_eq!(total, expected);
//!
//! assert_eq!(most_valuable(&products, &rates).unwrap().name, "Widget");
//! assert_eq!(least_valuable(&products, &rates).unwrap().name, "Gadget");
//! ```

pub mod convert;
pub mod error;
pub mod loader;
pub mod parse;
pub mod rates;
pub mod stats;
pub mod types;

pub use rust_decimal::Decimal;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::convert::to_reference;
    pub use crate::error::{PriceStatsError, Result};
    pub use crate::loader::{
        load_products_from_path, load_rates_from_path, read_products, read_rates,
    };
    pub use crate::parse::{parse_product, parse_rate};
    pub use crate::rates::RateSet;
    pub use crate::stats::{
        average_in_reference, least_valuable, most_valuable, sum_in_reference,
    };
    pub use crate::types::{CurrencyCode, CurrencyRate, Product, DELIMITER, SCALE};
    pub use rust_decimal::Decimal;
}
