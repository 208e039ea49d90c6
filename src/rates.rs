//! Rate resolution - ordered exchange-rate sets
//!
//! A [`RateSet`] keeps rate entries in load order and resolves a currency
//! code by scanning linearly for the first exact (case-sensitive) match.
//! Duplicate codes are allowed; the earliest entry wins. A missing code is
//! a hard [`UnknownCurrency`] error, never defaulted or skipped.
//!
//! [`UnknownCurrency`]: crate::error::PriceStatsError::UnknownCurrency

use crate::error::{PriceStatsError, Result};
use crate::types::CurrencyRate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ordered set of exchange rates, searched linearly by code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateSet {
    rates: Vec<CurrencyRate>,
}

impl RateSet {
    /// Create an empty rate set
    pub fn new() -> Self {
        Self { rates: Vec::new() }
    }

    /// Create from a list of entries, preserving order
    pub fn from_rates(rates: Vec<CurrencyRate>) -> Self {
        Self { rates }
    }

    /// Append an entry; does not deduplicate (first match still wins)
    pub fn push(&mut self, rate: CurrencyRate) {
        self.rates.push(rate);
    }

    /// Number of entries, counting duplicates
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// True if the set holds no entries
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterate entries in load order
    pub fn iter(&self) -> impl Iterator<Item = &CurrencyRate> {
        self.rates.iter()
    }

    /// Resolve a currency code to its rate.
    ///
    /// Scans in load order and returns the rate of the first entry whose
    /// code exactly equals `code`. Returns `UnknownCurrency` if no entry
    /// matches.
    pub fn find(&self, code: &str) -> Result<Decimal> {
        self.rates
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.rate)
            .ok_or_else(|| PriceStatsError::UnknownCurrency(code.to_string()))
    }
}

impl FromIterator<CurrencyRate> for RateSet {
    fn from_iter<I: IntoIterator<Item = CurrencyRate>>(iter: I) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}
