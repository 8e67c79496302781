//! SVG bar charts for the hour panels and the season totals.

use anyhow::Result;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::records::season_label;
use crate::view::DashboardView;

const HIGHLIGHT: RGBColor = RGBColor(0x90, 0xCA, 0xF9);
const MUTED: RGBColor = RGBColor(0xD3, 0xD3, 0xD3);

pub const HOURS_FILE: &str = "hours.svg";
pub const SEASONS_FILE: &str = "seasons.svg";

/// Writes `hours.svg` and `seasons.svg` for `view` into `dir`, creating it if needed.
///
/// Returns the paths written.
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn write_charts(dir: &Path, view: &DashboardView) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let hours_path = dir.join(HOURS_FILE);
    let seasons_path = dir.join(SEASONS_FILE);

    plot_hours(&hours_path, view)?;
    plot_seasons(&seasons_path, view)?;

    info!(range = %view.range, "Charts written");
    Ok(vec![hours_path, seasons_path])
}

/// Two side-by-side panels: busiest hours on the left, quietest on the right.
pub fn plot_hours(path: &Path, view: &DashboardView) -> Result<()> {
    let root = SVGBackend::new(path, (1280, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let panels = root.split_evenly((1, 2));
    let top: Vec<_> = view
        .top_hours
        .iter()
        .map(|t| (t.hour.to_string(), t.total))
        .collect();
    let bottom: Vec<_> = view
        .bottom_hours
        .iter()
        .map(|t| (t.hour.to_string(), t.total))
        .collect();

    draw_bars(&panels[0], "Hours with the Most Rentals", "Hour", &top, HIGHLIGHT)?;
    draw_bars(&panels[1], "Hours with the Fewest Rentals", "Hour", &bottom, MUTED)?;

    root.present()?;
    debug!(path = %path.display(), "Hour chart written");
    Ok(())
}

/// One bar per season present in the view.
pub fn plot_seasons(path: &Path, view: &DashboardView) -> Result<()> {
    let root = SVGBackend::new(path, (800, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let bars: Vec<_> = view
        .season_totals
        .iter()
        .map(|t| (season_label(t.season), t.total))
        .collect();

    draw_bars(&root, "Rentals by Season", "Season", &bars, MUTED)?;

    root.present()?;
    debug!(path = %path.display(), "Season chart written");
    Ok(())
}

fn draw_bars<DB>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    title: &str,
    x_desc: &str,
    bars: &[(String, u64)],
    color: RGBColor,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    if bars.is_empty() {
        area.titled(title, ("sans-serif", 22))?
            .draw(&Text::new("No data", (20, 20), ("sans-serif", 16)))?;
        return Ok(());
    }

    let y_max = bars.iter().map(|(_, v)| *v).max().unwrap_or(0).max(1);
    let y_max = y_max + y_max / 10;

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 22))
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .margin(10)
        .build_cartesian_2d((0u32..bars.len() as u32).into_segmented(), 0u64..y_max)?;

    let label = |v: &SegmentValue<u32>| -> String {
        match v {
            SegmentValue::CenterOf(i) => bars
                .get(*i as usize)
                .map(|(l, _)| l.clone())
                .unwrap_or_default(),
            _ => String::new(),
        }
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars.len())
        .x_label_formatter(&label)
        .x_desc(x_desc)
        .y_desc("Total Rentals")
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(color.filled())
            .margin(12)
            .data(bars.iter().enumerate().map(|(i, (_, v))| (i as u32, *v))),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::{HourTotal, SeasonTotal, Summary};
    use crate::filter::DateRange;
    use chrono::NaiveDate;
    use std::env;
    use std::fs;

    fn view(hours: Vec<HourTotal>, seasons: Vec<SeasonTotal>) -> DashboardView {
        let range = DateRange::single(NaiveDate::from_ymd_opt(2012, 7, 4).unwrap());
        DashboardView {
            range,
            bounds: range,
            daily_rows: 1,
            hourly_rows: hours.len(),
            summary: Summary {
                total_rentals: seasons.iter().map(|s| s.total).sum(),
                avg_temperature: Some(0.7),
                avg_humidity_pct: Some(55.0),
            },
            hour_totals: hours.clone(),
            top_hours: hours.clone(),
            bottom_hours: hours,
            season_totals: seasons,
        }
    }

    #[test]
    fn test_write_charts_creates_svg_files() {
        let dir = env::temp_dir().join("bikeshare_dashboard_test_charts");
        let _ = fs::remove_dir_all(&dir);

        let v = view(
            vec![HourTotal { hour: 17, total: 970 }, HourTotal { hour: 8, total: 640 }],
            vec![SeasonTotal { season: 3, total: 7000 }],
        );
        let written = write_charts(&dir, &v).unwrap();

        assert_eq!(written.len(), 2);
        for path in &written {
            let content = fs::read_to_string(path).unwrap();
            assert!(content.contains("<svg"));
        }

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_charts_with_empty_view() {
        let dir = env::temp_dir().join("bikeshare_dashboard_test_charts_empty");
        let _ = fs::remove_dir_all(&dir);

        let written = write_charts(&dir, &view(Vec::new(), Vec::new())).unwrap();
        assert!(written.iter().all(|p| p.exists()));

        fs::remove_dir_all(&dir).unwrap();
    }
}
