use crate::analyzers::types::{HourTotal, SeasonTotal};
use crate::records::{DailyRecord, HourlyRecord};
use std::collections::BTreeMap;

/// Number of bars shown in each of the highest/lowest hour panels.
pub const HOUR_PANEL_SIZE: usize = 5;

/// Sums `count` per key, returning one `(key, total)` per distinct key in key order.
fn sum_by_key<T, K, FK, FC>(rows: &[T], key: FK, count: FC) -> Vec<(K, u64)>
where
    K: Ord + Copy,
    FK: Fn(&T) -> K,
    FC: Fn(&T) -> u64,
{
    let mut totals: BTreeMap<K, u64> = BTreeMap::new();

    for row in rows {
        *totals.entry(key(row)).or_default() += count(row);
    }

    totals.into_iter().collect()
}

/// Groups hourly rows by hour of day and sums their rental counts.
///
/// Only hours present in `rows` appear in the output, ordered by hour.
pub fn aggregate_by_hour(rows: &[HourlyRecord]) -> Vec<HourTotal> {
    sum_by_key(rows, |r| r.hour, |r| r.count)
        .into_iter()
        .map(|(hour, total)| HourTotal { hour, total })
        .collect()
}

/// Groups daily rows by season code and sums their rental counts.
///
/// Only seasons present in `rows` appear in the output, ordered by code.
pub fn aggregate_by_season(rows: &[DailyRecord]) -> Vec<SeasonTotal> {
    sum_by_key(rows, |r| r.season, |r| r.count)
        .into_iter()
        .map(|(season, total)| SeasonTotal { season, total })
        .collect()
}

/// The `n` busiest hours, highest total first.
///
/// The sort is stable, so equal totals keep hour order.
pub fn top_hours(totals: &[HourTotal], n: usize) -> Vec<HourTotal> {
    let mut sorted = totals.to_vec();
    sorted.sort_by(|a, b| b.total.cmp(&a.total));
    sorted.truncate(n);
    sorted
}

/// The `n` quietest hours, lowest total first.
pub fn bottom_hours(totals: &[HourTotal], n: usize) -> Vec<HourTotal> {
    let mut sorted = totals.to_vec();
    sorted.sort_by_key(|t| t.total);
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn hourly(hour: u8, count: u64) -> HourlyRecord {
        HourlyRecord {
            date: date(1),
            hour,
            count,
        }
    }

    fn daily(d: u32, season: u8, count: u64) -> DailyRecord {
        DailyRecord {
            date: date(d),
            season,
            count,
            temp: 0.4,
            humidity: 0.6,
        }
    }

    #[test]
    fn test_aggregate_by_hour_groups_and_sums() {
        let rows = vec![hourly(5, 10), hourly(5, 20), hourly(6, 5)];
        let totals = aggregate_by_hour(&rows);

        assert_eq!(
            totals,
            vec![
                HourTotal { hour: 5, total: 30 },
                HourTotal { hour: 6, total: 5 }
            ]
        );

        let top = top_hours(&totals, HOUR_PANEL_SIZE);
        assert_eq!(top[0], HourTotal { hour: 5, total: 30 });
        assert_eq!(top[1], HourTotal { hour: 6, total: 5 });
    }

    #[test]
    fn test_aggregate_by_season_groups_and_sums() {
        let rows = vec![daily(1, 1, 100), daily(2, 1, 200), daily(3, 2, 50)];
        let totals = aggregate_by_season(&rows);

        assert_eq!(
            totals,
            vec![
                SeasonTotal {
                    season: 1,
                    total: 300
                },
                SeasonTotal {
                    season: 2,
                    total: 50
                }
            ]
        );
    }

    #[test]
    fn test_aggregation_preserves_total_mass() {
        let rows: Vec<_> = (0..240u64).map(|i| hourly((i % 24) as u8, i * 3 + 1)).collect();
        let expected: u64 = rows.iter().map(|r| r.count).sum();

        let totals = aggregate_by_hour(&rows);
        assert_eq!(totals.iter().map(|t| t.total).sum::<u64>(), expected);
        assert_eq!(totals.len(), 24);
        assert!(totals.iter().all(|t| t.hour <= 23));

        let days: Vec<_> = (1..=28).map(|d| daily(d, (d % 4 + 1) as u8, d as u64 * 10)).collect();
        let expected: u64 = days.iter().map(|r| r.count).sum();
        let seasons = aggregate_by_season(&days);
        assert_eq!(seasons.iter().map(|t| t.total).sum::<u64>(), expected);
    }

    #[test]
    fn test_empty_input_gives_empty_aggregates() {
        assert!(aggregate_by_hour(&[]).is_empty());
        assert!(aggregate_by_season(&[]).is_empty());
        assert!(top_hours(&[], HOUR_PANEL_SIZE).is_empty());
    }

    #[test]
    fn test_missing_hours_are_not_zero_filled() {
        let rows = vec![hourly(8, 3), hourly(17, 9), hourly(8, 1)];
        let totals = aggregate_by_hour(&rows);

        assert_eq!(totals.len(), 2);
        assert_eq!(top_hours(&totals, HOUR_PANEL_SIZE).len(), 2);
        assert_eq!(bottom_hours(&totals, HOUR_PANEL_SIZE).len(), 2);
    }

    #[test]
    fn test_top_and_bottom_selection() {
        let totals: Vec<_> = [40, 10, 70, 10, 90, 20, 60]
            .iter()
            .enumerate()
            .map(|(h, &total)| HourTotal {
                hour: h as u8,
                total,
            })
            .collect();

        let top: Vec<u8> = top_hours(&totals, 5).iter().map(|t| t.hour).collect();
        assert_eq!(top, vec![4, 2, 6, 0, 5]);

        // ties keep hour order
        let bottom: Vec<u8> = bottom_hours(&totals, 5).iter().map(|t| t.hour).collect();
        assert_eq!(bottom, vec![1, 3, 5, 0, 6]);
    }
}
