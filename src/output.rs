//! Terminal rendering of a [`DashboardView`].
//!
//! Supports a plain-text dashboard layout and JSON serialization.

use anyhow::Result;
use std::io::Write;
use tracing::debug;

use crate::records::season_label;
use crate::view::DashboardView;

const BAR_WIDTH: usize = 40;
const NOT_AVAILABLE: &str = "N/A";

/// Formats the mean temperature the way the metric slot displays it.
pub fn format_temperature(value: Option<f64>) -> String {
    match value {
        Some(t) => format!("{:.2}°C", t),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Formats the mean humidity percentage the way the metric slot displays it.
pub fn format_humidity(value: Option<f64>) -> String {
    match value {
        Some(h) => format!("{:.1}%", h),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Writes the whole dashboard as text: header, range picker, metrics and charts.
pub fn render_text<W: Write>(out: &mut W, view: &DashboardView) -> Result<()> {
    debug!(range = %view.range, "Rendering text dashboard");

    writeln!(out, "Bike Sharing Dashboard")?;
    writeln!(out, "======================")?;
    writeln!(
        out,
        "Date range: {}   (available {} .. {})",
        view.range, view.bounds.start, view.bounds.end
    )?;
    writeln!(out)?;

    writeln!(out, "Rental Statistics")?;
    writeln!(out, "-----------------")?;
    writeln!(out, "  Total Rentals:       {}", view.summary.total_rentals)?;
    writeln!(
        out,
        "  Average Temperature: {}",
        format_temperature(view.summary.avg_temperature)
    )?;
    writeln!(
        out,
        "  Average Humidity:    {}",
        format_humidity(view.summary.avg_humidity_pct)
    )?;
    writeln!(out)?;

    writeln!(out, "Hours with the Most and Fewest Rentals")?;
    writeln!(out, "--------------------------------------")?;
    render_bars(
        out,
        "Highest",
        view.top_hours
            .iter()
            .map(|t| (format!("{:02}:00", t.hour), t.total)),
    )?;
    render_bars(
        out,
        "Lowest",
        view.bottom_hours
            .iter()
            .map(|t| (format!("{:02}:00", t.hour), t.total)),
    )?;
    writeln!(out)?;

    writeln!(out, "Rentals by Season")?;
    writeln!(out, "-----------------")?;
    render_bars(
        out,
        "Season",
        view.season_totals
            .iter()
            .map(|t| (season_label(t.season), t.total)),
    )?;

    Ok(())
}

/// Writes one horizontal bar per `(label, value)` pair, scaled to the largest value.
fn render_bars<W, I>(out: &mut W, title: &str, bars: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = (String, u64)>,
{
    let bars: Vec<_> = bars.into_iter().collect();
    writeln!(out, "  {}", title)?;

    if bars.is_empty() {
        writeln!(out, "    (no data)")?;
        return Ok(());
    }

    let max = bars.iter().map(|(_, v)| *v).max().unwrap_or(0).max(1);
    let label_width = bars.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);

    for (label, value) in &bars {
        let len = (*value as f64 / max as f64 * BAR_WIDTH as f64).round() as usize;
        writeln!(
            out,
            "    {:<width$} {} {}",
            label,
            "█".repeat(len),
            value,
            width = label_width
        )?;
    }

    Ok(())
}

/// Writes the view as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, view: &DashboardView) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, view)?;
    writeln!(out)?;
    Ok(())
}
