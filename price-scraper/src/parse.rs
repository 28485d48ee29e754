use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{PriceError, Result};

/// Fuel types tracked in the monthly file, keyed in JSON by their lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Gasoline,
    Diesel,
    Lpg,
}

impl FuelType {
    /// Map an Opinet `PRODCD` to a fuel type. Other products (premium
    /// gasoline, kerosene, ...) are not tracked.
    pub fn from_product_code(code: &str) -> Option<FuelType> {
        match code {
            "B027" => Some(FuelType::Gasoline),
            "D047" => Some(FuelType::Diesel),
            "K015" => Some(FuelType::Lpg),
            _ => None,
        }
    }
}

/// ISO date (`YYYY-MM-DD`) to the rounded price of each fuel seen that day.
pub type PriceSnapshot = BTreeMap<String, BTreeMap<FuelType, i64>>;

// `OIL` records may be interleaved with other elements under the root.
#[derive(Debug, Deserialize)]
struct PriceReport {
    #[serde(rename = "OIL", default)]
    entries: Vec<OilEntry>,
}

#[derive(Debug, Deserialize)]
struct OilEntry {
    #[serde(rename = "DATE")]
    date: String,
    #[serde(rename = "PRODCD")]
    product_code: String,
    #[serde(rename = "PRICE")]
    price: String,
}

pub fn parse_prices(xml: &[u8]) -> Result<PriceSnapshot> {
    let report: PriceReport = quick_xml::de::from_reader(xml)?;
    let mut prices_by_date = PriceSnapshot::new();

    for entry in report.entries {
        let date = iso_date(entry.date.trim())?;
        let product_code = entry.product_code.trim();

        let fuel = match FuelType::from_product_code(product_code) {
            Some(fuel) => fuel,
            None => {
                debug!("skipping product {} on {}", product_code, date);
                continue;
            }
        };

        let price = round_price(entry.price.trim())?;
        prices_by_date.entry(date).or_default().insert(fuel, price);
    }

    Ok(prices_by_date)
}

/// `20241031` -> `2024-10-31`
pub fn iso_date(raw: &str) -> Result<String> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PriceError::InvalidDate(raw.to_string()));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y%m%d")
        .map_err(|_| PriceError::InvalidDate(raw.to_string()))?;
    Ok(date.format("%Y-%m-%d").to_string())
}

/// Round to the nearest won, halves going to the even neighbour.
pub fn round_price(raw: &str) -> Result<i64> {
    let value: f64 = raw
        .parse()
        .map_err(|_| PriceError::InvalidPrice(raw.to_string()))?;
    let rounded = value.round_ties_even();
    // i64::MAX as f64 is 2^63, one past the largest i64
    if !rounded.is_finite() || rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
        return Err(PriceError::InvalidPrice(raw.to_string()));
    }
    Ok(rounded as i64)
}
