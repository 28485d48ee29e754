use chrono::{DateTime, FixedOffset, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::parse::PriceSnapshot;

/// Korea Standard Time, UTC+9, with no daylight saving.
const KST_OFFSET_SECS: i32 = 9 * 3600;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPrices {
    pub month: String,
    pub prices_by_date: PriceSnapshot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    Saved(PathBuf),
    SkippedEmpty,
    SkippedWrongMonth {
        data_month: String,
        current_month: String,
    },
}

impl fmt::Display for PersistOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistOutcome::Saved(path) => write!(f, "Saved data to {}", path.display()),
            PersistOutcome::SkippedEmpty => write!(f, "No data to save"),
            PersistOutcome::SkippedWrongMonth {
                data_month,
                current_month,
            } => write!(
                f,
                "Skipped: data month {} does not match current month {}",
                data_month, current_month
            ),
        }
    }
}

/// `YYYY-MM` of `now` as seen in Korea.
pub fn current_month(now: DateTime<Utc>) -> String {
    let kst = FixedOffset::east_opt(KST_OFFSET_SECS).expect("UTC+9 is a valid offset");
    now.with_timezone(&kst).format("%Y-%m").to_string()
}

/// Write `<month>.json` into `dir` when the newest date in `snapshot` falls in
/// the current month. A run for a month that has already ended would replace
/// that month's file with whatever the API still reports, so it is skipped.
pub fn persist_prices(
    snapshot: &PriceSnapshot,
    now: DateTime<Utc>,
    dir: &Path,
) -> Result<PersistOutcome> {
    // keys are ISO dates, so the last key is the latest date
    let last_date = match snapshot.keys().next_back() {
        Some(date) => date,
        None => {
            info!("No data to save");
            return Ok(PersistOutcome::SkippedEmpty);
        }
    };

    let data_month = last_date.get(..7).unwrap_or(last_date).to_string();
    let current_month = current_month(now);
    if data_month != current_month {
        warn!(
            "latest data is from {} but current month is {}, not saving",
            data_month, current_month
        );
        return Ok(PersistOutcome::SkippedWrongMonth {
            data_month,
            current_month,
        });
    }

    let output = MonthlyPrices {
        month: data_month,
        prices_by_date: snapshot.clone(),
    };
    let path = dir.join(format!("{}.json", output.month));

    let json = serde_json::to_string_pretty(&output)?;
    fs::write(&path, json)?;
    info!("wrote {} dates to {}", output.prices_by_date.len(), path.display());

    Ok(PersistOutcome::Saved(path))
}
