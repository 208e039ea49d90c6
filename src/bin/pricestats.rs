//! pricestats CLI - report driver for valuation statistics
//!
//! Loads a product file and a rate file, converts every price into the
//! reference currency, and prints the total, average, and most/least
//! valuable products.
//!
//! ## Example Usage
//!
//! ```bash
//! # Plain report
//! pricestats products.csv rates.csv
//!
//! # JSON output with a custom delimiter and reference label
//! pricestats products.csv rates.csv --json --delimiter ',' --reference USD
//! ```

use clap::Parser;
use colored::Colorize;
use pricestats::convert::to_reference;
use pricestats::error::Result;
use pricestats::loader::{load_products_from_path_with, load_rates_from_path_with};
use pricestats::rates::RateSet;
use pricestats::stats::{
    average_in_reference, least_valuable, most_valuable, sum_in_reference,
};
use pricestats::types::Product;
use pricestats::Decimal;
use serde::Serialize;
use std::path::PathBuf;
use std::process;

/// pricestats: reference-currency valuation statistics
#[derive(Parser)]
#[command(name = "pricestats")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Valuation statistics over delimited product and rate files", long_about = None)]
struct Cli {
    /// Product file (name;price;currency, one record per line)
    #[arg(value_name = "PRODUCTS")]
    products: PathBuf,

    /// Rate file (code;rate, native units per reference unit)
    #[arg(value_name = "RATES")]
    rates: PathBuf,

    /// Field delimiter
    #[arg(short, long, default_value_t = ';')]
    delimiter: char,

    /// Label for the reference currency in the report
    #[arg(short, long, default_value = "EUR")]
    reference: String,

    /// Emit the report as JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct ReportEntry {
    name: String,
    value: Decimal,
}

#[derive(Serialize)]
struct Report {
    reference: String,
    total: Decimal,
    average: Decimal,
    most_valuable: ReportEntry,
    least_valuable: ReportEntry,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let products = load_products_from_path_with(&cli.products, cli.delimiter)?;
    let rates = load_rates_from_path_with(&cli.rates, cli.delimiter)?;

    let report = build_report(&products, &rates, &cli.reference)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn build_report(products: &[Product], rates: &RateSet, reference: &str) -> Result<Report> {
    let total = sum_in_reference(products, rates)?;
    let average = average_in_reference(products, rates)?;

    let most = most_valuable(products, rates)?;
    let least = least_valuable(products, rates)?;

    Ok(Report {
        reference: reference.to_string(),
        total,
        average,
        most_valuable: ReportEntry {
            name: most.name.clone(),
            value: to_reference(most.price, rates.find(&most.currency)?)?,
        },
        least_valuable: ReportEntry {
            name: least.name.clone(),
            value: to_reference(least.price, rates.find(&least.currency)?)?,
        },
    })
}

fn print_report(report: &Report) {
    println!(
        "{} {} {}",
        "Total value:".bold(),
        report.total,
        report.reference
    );
    println!(
        "{} {} {}",
        "Average value:".bold(),
        report.average,
        report.reference
    );
    println!(
        "{} {} - {} {}",
        "Most valuable:".bold(),
        report.most_valuable.name.green(),
        report.most_valuable.value,
        report.reference
    );
    println!(
        "{} {} - {} {}",
        "Least valuable:".bold(),
        report.least_valuable.name.yellow(),
        report.least_valuable.value,
        report.reference
    );
}
