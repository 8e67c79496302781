//! CSV loading for the daily and hourly rental tables.

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

use crate::filter::DateRange;
use crate::records::{DailyRecord, HourlyRecord};

/// Both tables, loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub daily: Vec<DailyRecord>,
    pub hourly: Vec<HourlyRecord>,
    bounds: DateRange,
}

impl Dataset {
    /// Builds a dataset from already-decoded tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the daily table is empty, since there is no date
    /// range to offer.
    pub fn new(daily: Vec<DailyRecord>, hourly: Vec<HourlyRecord>) -> Result<Self> {
        let (Some(start), Some(end)) = (
            daily.iter().map(|r| r.date).min(),
            daily.iter().map(|r| r.date).max(),
        ) else {
            bail!("daily dataset contains no rows");
        };

        Ok(Self {
            daily,
            hourly,
            bounds: DateRange::new(start, end),
        })
    }

    /// Loads `day.csv` and `hour.csv` style files from the given paths.
    #[tracing::instrument(skip_all, fields(day = %day_path.display(), hour = %hour_path.display()))]
    pub fn load(day_path: &Path, hour_path: &Path) -> Result<Self> {
        let daily = load_daily(day_path)?;
        let hourly = load_hourly(hour_path)?;
        let dataset = Self::new(daily, hourly)?;

        info!(
            daily_rows = dataset.daily.len(),
            hourly_rows = dataset.hourly.len(),
            min_date = %dataset.bounds.start,
            max_date = %dataset.bounds.end,
            "Dataset loaded"
        );

        Ok(dataset)
    }

    /// Earliest and latest date of the daily table.
    pub fn bounds(&self) -> DateRange {
        self.bounds
    }
}

/// Reads every row of a daily CSV file.
pub fn load_daily(path: &Path) -> Result<Vec<DailyRecord>> {
    load_rows(path)
}

/// Reads every row of an hourly CSV file.
pub fn load_hourly(path: &Path) -> Result<Vec<HourlyRecord>> {
    load_rows(path)
}

fn load_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut rdr = csv::Reader::from_reader(file);
    let mut rows = Vec::new();

    for result in rdr.deserialize() {
        let record: T = result.with_context(|| format!("failed to decode {}", path.display()))?;
        rows.push(record);
    }

    debug!(path = %path.display(), rows = rows.len(), "CSV rows read");
    Ok(rows)
}
