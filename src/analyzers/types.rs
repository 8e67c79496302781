//! Data types produced by the aggregation pipeline.

use serde::Serialize;

/// Total rentals for one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourTotal {
    pub hour: u8,
    pub total: u64,
}

/// Total rentals for one season code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonTotal {
    pub season: u8,
    pub total: u64,
}

/// Scalar metrics over a daily table.
///
/// The averages are `None` when the table is empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub total_rentals: u64,
    pub avg_temperature: Option<f64>,
    pub avg_humidity_pct: Option<f64>,
}
