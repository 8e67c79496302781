use crate::analyzers::types::Summary;
use crate::analyzers::utility::mean;
use crate::records::DailyRecord;

/// Computes total rentals, mean temperature and mean humidity (as a percentage)
/// over a daily table.
///
/// No rounding is applied; an empty table yields a zero total and no averages.
pub fn summarize(rows: &[DailyRecord]) -> Summary {
    Summary {
        total_rentals: rows.iter().map(|r| r.count).sum(),
        avg_temperature: mean(rows.iter().map(|r| r.temp)),
        avg_humidity_pct: mean(rows.iter().map(|r| r.humidity)).map(|h| h * 100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{DateRange, filter_by_date};
    use chrono::NaiveDate;

    fn row(d: u32, count: u64, temp: f64, humidity: f64) -> DailyRecord {
        DailyRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, d).unwrap(),
            season: 1,
            count,
            temp,
            humidity,
        }
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_rentals, 0);
        assert!(summary.avg_temperature.is_none());
        assert!(summary.avg_humidity_pct.is_none());
    }

    #[test]
    fn test_summarize_single_day_range() {
        let rows = vec![row(1, 100, 0.3, 0.5), row(2, 200, 0.5, 0.7)];
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let filtered = filter_by_date(&rows, &DateRange::single(day));
        assert_eq!(filtered.len(), 1);

        let summary = summarize(&filtered);
        assert_eq!(summary.total_rentals, 100);
        assert!((summary.avg_temperature.unwrap() - 0.30).abs() < 1e-9);
        assert!((summary.avg_humidity_pct.unwrap() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_means() {
        let rows = vec![row(1, 100, 0.3, 0.5), row(2, 200, 0.5, 0.7)];
        let summary = summarize(&rows);

        assert_eq!(summary.total_rentals, 300);
        assert!((summary.avg_temperature.unwrap() - 0.4).abs() < 1e-9);
        assert!((summary.avg_humidity_pct.unwrap() - 60.0).abs() < 1e-9);
    }
}
