//! Inclusive date-range filtering over dated tables.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::records::Dated;

/// An inclusive `[start, end]` pair of calendar dates.
///
/// `start > end` is representable; such a range contains no dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A range covering exactly one day.
    pub fn single(day: NaiveDate) -> Self {
        Self::new(day, day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Builds a range from optional ends, filling a missing end from `bounds`.
    ///
    /// A filled-in end never lands on the wrong side of the given one, so a
    /// lone date past the data yields a range with no rows rather than an
    /// inverted one.
    pub fn from_parts(start: Option<NaiveDate>, end: Option<NaiveDate>, bounds: &DateRange) -> Self {
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            (Some(start), None) => Self::new(start, bounds.end.max(start)),
            (None, Some(end)) => Self::new(bounds.start.min(end), end),
            (None, None) => *bounds,
        }
    }

    /// True if the two ranges share at least one day.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Clamps both ends into `bounds`, or `None` if the range lies wholly outside them.
    pub fn clamp_to(&self, bounds: &DateRange) -> Option<Self> {
        if !self.overlaps(bounds) {
            return None;
        }

        Some(Self {
            start: self.start.clamp(bounds.start, bounds.end),
            end: self.end.clamp(bounds.start, bounds.end),
        })
    }

    /// Number of calendar days covered, 0 when inverted.
    pub fn num_days(&self) -> i64 {
        ((self.end - self.start).num_days() + 1).max(0)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}

/// Returns the rows whose date lies within `range`, in input order.
pub fn filter_by_date<T: Dated + Clone>(rows: &[T], range: &DateRange) -> Vec<T> {
    rows.iter()
        .filter(|row| range.contains(row.date()))
        .cloned()
        .collect()
}
