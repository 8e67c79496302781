//! Row types for the daily and hourly rental tables.

use chrono::NaiveDate;
use serde::Deserialize;

/// Anything carrying a calendar date that the range filter can key on.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// A single row of `day.csv`. Columns not listed here are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyRecord {
    #[serde(rename = "dteday")]
    pub date: NaiveDate,
    pub season: u8,
    #[serde(rename = "cnt")]
    pub count: u64,
    pub temp: f64,
    #[serde(rename = "hum")]
    pub humidity: f64,
}

/// A single row of `hour.csv`. Columns not listed here are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HourlyRecord {
    #[serde(rename = "dteday")]
    pub date: NaiveDate,
    #[serde(rename = "hr")]
    pub hour: u8,
    #[serde(rename = "cnt")]
    pub count: u64,
}

impl Dated for DailyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for HourlyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Display name for a season code.
///
/// | Code | Season |
/// |------|--------|
/// | 1    | Spring |
/// | 2    | Summer |
/// | 3    | Fall   |
/// | 4    | Winter |
pub fn season_label(season: u8) -> String {
    match season {
        1 => "Spring".into(),
        2 => "Summer".into(),
        3 => "Fall".into(),
        4 => "Winter".into(),
        other => format!("Season {}", other),
    }
}
