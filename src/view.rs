//! The derived dashboard view and the application state that produces it.

use serde::Serialize;
use tracing::debug;

use crate::analyzers::aggregate::{
    HOUR_PANEL_SIZE, aggregate_by_hour, aggregate_by_season, bottom_hours, top_hours,
};
use crate::analyzers::summary::summarize;
use crate::analyzers::types::{HourTotal, SeasonTotal, Summary};
use crate::filter::{DateRange, filter_by_date};
use crate::loader::Dataset;

/// Everything the presentation layer needs for one date range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub range: DateRange,
    pub bounds: DateRange,
    pub daily_rows: usize,
    pub hourly_rows: usize,
    pub summary: Summary,
    pub hour_totals: Vec<HourTotal>,
    pub top_hours: Vec<HourTotal>,
    pub bottom_hours: Vec<HourTotal>,
    pub season_totals: Vec<SeasonTotal>,
}

impl DashboardView {
    /// Runs filter, aggregation and summary for `range` over both tables.
    #[tracing::instrument(skip_all, fields(range = %range))]
    pub fn compute(dataset: &Dataset, range: &DateRange) -> Self {
        let daily = filter_by_date(&dataset.daily, range);
        let hourly = filter_by_date(&dataset.hourly, range);

        let hour_totals = aggregate_by_hour(&hourly);
        let view = Self {
            range: *range,
            bounds: dataset.bounds(),
            daily_rows: daily.len(),
            hourly_rows: hourly.len(),
            summary: summarize(&daily),
            top_hours: top_hours(&hour_totals, HOUR_PANEL_SIZE),
            bottom_hours: bottom_hours(&hour_totals, HOUR_PANEL_SIZE),
            season_totals: aggregate_by_season(&daily),
            hour_totals,
        };

        debug!(
            daily_rows = view.daily_rows,
            hourly_rows = view.hourly_rows,
            total_rentals = view.summary.total_rentals,
            "View computed"
        );

        view
    }
}

/// Process-wide state: the loaded tables and the currently selected range.
#[derive(Debug)]
pub struct AppState {
    dataset: Dataset,
    range: DateRange,
}

impl AppState {
    /// Starts with the full range of the daily table selected.
    pub fn new(dataset: Dataset) -> Self {
        let range = dataset.bounds();
        Self { dataset, range }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    /// The view for the current selection.
    pub fn view(&self) -> DashboardView {
        DashboardView::compute(&self.dataset, &self.range)
    }

    /// Selects `range` and returns the new view.
    ///
    /// A range overlapping the dataset is clamped to its bounds; one lying
    /// wholly outside is kept as given and yields an empty view.
    pub fn apply(&mut self, range: DateRange) -> DashboardView {
        self.range = range
            .clamp_to(&self.dataset.bounds())
            .unwrap_or(range);
        self.view()
    }

    /// Restores the full range.
    pub fn reset(&mut self) -> DashboardView {
        self.apply(self.dataset.bounds())
    }
}
