//! Aggregate statistics over converted product values
//!
//! Four pure operations over `(&[Product], &RateSet)`: total value, average
//! value, most valuable product, and least valuable product, all measured in
//! the reference currency. Products are processed in input order, which
//! pins down two contracts:
//!
//! - the first unresolvable currency in input order is the error reported;
//! - min/max ties go to the earlier product.
//!
//! Valuable-ness always compares *converted* prices; raw native prices are
//! never compared across currencies. Parallel variants (`*_par`) convert
//! with rayon and produce results identical to the sequential ones,
//! including error position and tie-breaks.

use crate::convert::{round_to_scale, to_reference};
use crate::error::{PriceStatsError, Result};
use crate::rates::RateSet;
use crate::types::Product;
use rayon::prelude::*;
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Resolve a product's rate and convert its price to the reference currency
fn convert_product(product: &Product, rates: &RateSet) -> Result<Decimal> {
    let rate = rates.find(&product.currency)?;
    to_reference(product.price, rate)
}

/// Sum of all products' converted prices, in input order
pub fn sum_in_reference(products: &[Product], rates: &RateSet) -> Result<Decimal> {
    let mut sum = Decimal::ZERO;
    for product in products {
        let value = convert_product(product, rates)?;
        sum = sum.checked_add(value).ok_or(PriceStatsError::Overflow)?;
    }
    Ok(sum)
}

/// Average converted price: sum divided by count, at the fixed scale.
///
/// Fails with `EmptyInput` on an empty product list; the zero count is
/// checked explicitly rather than left to divide-by-zero fallthrough.
pub fn average_in_reference(products: &[Product], rates: &RateSet) -> Result<Decimal> {
    if products.is_empty() {
        return Err(PriceStatsError::EmptyInput);
    }

    let sum = sum_in_reference(products, rates)?;
    let count = Decimal::from(products.len() as u64);
    let quotient = sum.checked_div(count).ok_or(PriceStatsError::Overflow)?;
    Ok(round_to_scale(quotient))
}

/// Product with the maximal converted price; ties go to the earlier product
pub fn most_valuable<'a>(products: &'a [Product], rates: &RateSet) -> Result<&'a Product> {
    select_by(products, rates, Ordering::Greater)
}

/// Product with the minimal converted price; ties go to the earlier product
pub fn least_valuable<'a>(products: &'a [Product], rates: &RateSet) -> Result<&'a Product> {
    select_by(products, rates, Ordering::Less)
}

fn select_by<'a>(
    products: &'a [Product],
    rates: &RateSet,
    preference: Ordering,
) -> Result<&'a Product> {
    let (first, rest) = products.split_first().ok_or(PriceStatsError::EmptyInput)?;

    let mut best = first;
    let mut best_value = convert_product(first, rates)?;

    // strict comparison keeps the earlier product on equal values
    for product in rest {
        let value = convert_product(product, rates)?;
        if value.cmp(&best_value) == preference {
            best = product;
            best_value = value;
        }
    }

    Ok(best)
}

/// Convert every product in parallel, reporting errors by input position.
///
/// All conversions run under rayon; the results are then scanned in input
/// order so the error surfaced is the same one the sequential path would
/// hit first.
fn converted_values_par(products: &[Product], rates: &RateSet) -> Result<Vec<Decimal>> {
    let converted: Vec<Result<Decimal>> = products
        .par_iter()
        .map(|product| convert_product(product, rates))
        .collect();

    let mut values = Vec::with_capacity(converted.len());
    for result in converted {
        values.push(result?);
    }
    Ok(values)
}

/// Parallel variant of [`sum_in_reference`]
pub fn sum_in_reference_par(products: &[Product], rates: &RateSet) -> Result<Decimal> {
    let mut sum = Decimal::ZERO;
    for value in converted_values_par(products, rates)? {
        sum = sum.checked_add(value).ok_or(PriceStatsError::Overflow)?;
    }
    Ok(sum)
}

/// Parallel variant of [`average_in_reference`]
pub fn average_in_reference_par(products: &[Product], rates: &RateSet) -> Result<Decimal> {
    if products.is_empty() {
        return Err(PriceStatsError::EmptyInput);
    }

    let sum = sum_in_reference_par(products, rates)?;
    let count = Decimal::from(products.len() as u64);
    let quotient = sum.checked_div(count).ok_or(PriceStatsError::Overflow)?;
    Ok(round_to_scale(quotient))
}

/// Parallel variant of [`most_valuable`]
pub fn most_valuable_par<'a>(products: &'a [Product], rates: &RateSet) -> Result<&'a Product> {
    select_by_par(products, rates, Ordering::Greater)
}

/// Parallel variant of [`least_valuable`]
pub fn least_valuable_par<'a>(products: &'a [Product], rates: &RateSet) -> Result<&'a Product> {
    select_by_par(products, rates, Ordering::Less)
}

fn select_by_par<'a>(
    products: &'a [Product],
    rates: &RateSet,
    preference: Ordering,
) -> Result<&'a Product> {
    if products.is_empty() {
        return Err(PriceStatsError::EmptyInput);
    }

    let values = converted_values_par(products, rates)?;

    let mut best_index = 0;
    for (index, value) in values.iter().enumerate().skip(1) {
        if value.cmp(&values[best_index]) == preference {
            best_index = index;
        }
    }

    Ok(&products[best_index])
}
