pub mod config;
pub mod error;
pub mod fetch;
pub mod parse;
pub mod persist;

#[cfg(test)]
pub mod tests;

use chrono::{DateTime, Utc};
use std::path::Path;

pub use crate::config::Config;
pub use crate::error::{PriceError, Result};
pub use crate::fetch::fetch_prices;
pub use crate::parse::{parse_prices, FuelType, PriceSnapshot};
pub use crate::persist::{current_month, persist_prices, MonthlyPrices, PersistOutcome};

/// Parse a fetched response body and save it for the month it belongs to.
///
/// The body and the clock are passed in so the whole pipeline after the
/// network call can run without either.
pub fn run(xml: &[u8], now: DateTime<Utc>, output_dir: &Path) -> Result<PersistOutcome> {
    let snapshot = parse_prices(xml)?;
    log::info!("parsed prices for {} dates", snapshot.len());
    persist_prices(&snapshot, now, output_dir)
}
