use super::super::dataset::RentalDatasets;
use super::super::domain::{DailyRecord, DateRange, HourlyRecord, Season};
use super::views::{
    DailyPoint, HourVolumeEntry, RentalReportSummary, RentalTotals, SeasonVolumeEntry, UserSplit,
    TOP_HOUR_ENTRIES,
};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// All derived tables for one date-range selection. Built in a single pass
/// over the filtered tables; every field is a pure projection of the inputs.
#[derive(Debug)]
pub struct RentalReport {
    pub range: DateRange,
    /// Grouped hourly totals in ascending hour order, covering exactly the
    /// distinct hours present in the filtered range.
    pub hourly_totals_by_hour: Vec<(u8, u64)>,
    /// The same grouped base, stably re-sorted descending by total. Ties
    /// resolve to the lower hour.
    pub hourly_totals_by_volume: Vec<(u8, u64)>,
    pub season_totals: Vec<(Season, u64)>,
    pub daily_series: Vec<(NaiveDate, u64)>,
    pub registered_by_date: Vec<(NaiveDate, u64)>,
    pub casual_by_date: Vec<(NaiveDate, u64)>,
    pub total_rentals: u64,
    pub total_registered: u64,
    pub total_casual: u64,
}

impl RentalReport {
    pub fn build(datasets: &RentalDatasets, range: DateRange) -> Self {
        let daily = datasets.filter_daily(&range);
        let hourly = datasets.filter_hourly(&range);

        let hourly_totals_by_hour = hourly_totals(&hourly);
        let hourly_totals_by_volume = sorted_by_volume(&hourly_totals_by_hour);
        let season_totals = season_totals(&hourly);
        let daily_series = sum_by_date(&daily, |record| record.count);
        let registered_by_date = sum_by_date(&daily, |record| record.registered);
        let casual_by_date = sum_by_date(&daily, |record| record.casual);

        let total_rentals = daily.iter().map(|record| u64::from(record.count)).sum();
        let total_registered = registered_by_date.iter().map(|(_, sum)| sum).sum();
        let total_casual = casual_by_date.iter().map(|(_, sum)| sum).sum();

        Self {
            range,
            hourly_totals_by_hour,
            hourly_totals_by_volume,
            season_totals,
            daily_series,
            registered_by_date,
            casual_by_date,
            total_rentals,
            total_registered,
            total_casual,
        }
    }

    pub fn summary(&self) -> RentalReportSummary {
        let busiest_hours = self
            .hourly_totals_by_volume
            .iter()
            .take(TOP_HOUR_ENTRIES)
            .map(|&(hour, total)| HourVolumeEntry { hour, total })
            .collect();

        let quietest_hours = self
            .hourly_totals_by_hour
            .iter()
            .take(TOP_HOUR_ENTRIES)
            .map(|&(hour, total)| HourVolumeEntry { hour, total })
            .collect();

        let mut season_totals: Vec<SeasonVolumeEntry> = self
            .season_totals
            .iter()
            .map(|&(season, total)| SeasonVolumeEntry {
                season,
                season_label: season.label(),
                total,
            })
            .collect();
        season_totals.sort_by(|a, b| b.season_label.cmp(a.season_label));

        RentalReportSummary {
            start_date: self.range.start,
            end_date: self.range.end,
            totals: RentalTotals {
                total_rentals: self.total_rentals,
                total_registered: self.total_registered,
                total_casual: self.total_casual,
            },
            daily_series: to_points(&self.daily_series),
            registered_by_date: to_points(&self.registered_by_date),
            casual_by_date: to_points(&self.casual_by_date),
            busiest_hours,
            quietest_hours,
            season_totals,
            user_split: UserSplit::fixed(),
        }
    }
}

/// Groups the filtered hourly rows by hour-of-day and sums count. The grouped
/// base is ascending by hour, which is what the descending volume sort uses
/// as its stable tie-break order.
fn hourly_totals(rows: &[&HourlyRecord]) -> Vec<(u8, u64)> {
    let mut totals: BTreeMap<u8, u64> = BTreeMap::new();
    for record in rows {
        *totals.entry(record.hour).or_insert(0) += u64::from(record.count);
    }
    totals.into_iter().collect()
}

fn sorted_by_volume(base: &[(u8, u64)]) -> Vec<(u8, u64)> {
    let mut by_volume = base.to_vec();
    by_volume.sort_by(|a, b| b.1.cmp(&a.1));
    by_volume
}

fn season_totals(rows: &[&HourlyRecord]) -> Vec<(Season, u64)> {
    let mut totals: BTreeMap<Season, u64> = BTreeMap::new();
    for record in rows {
        *totals.entry(record.season).or_insert(0) += u64::from(record.count);
    }
    totals.into_iter().collect()
}

fn sum_by_date(rows: &[&DailyRecord], field: impl Fn(&DailyRecord) -> u32) -> Vec<(NaiveDate, u64)> {
    let mut totals: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in rows {
        *totals.entry(record.date).or_insert(0) += u64::from(field(record));
    }
    totals.into_iter().collect()
}

fn to_points(series: &[(NaiveDate, u64)]) -> Vec<DailyPoint> {
    series
        .iter()
        .map(|&(date, total)| DailyPoint { date, total })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn daily(day: u32, count: u32, registered: u32, casual: u32) -> DailyRecord {
        DailyRecord {
            date: date(2011, 1, day),
            season: Season::Spring,
            count,
            registered,
            casual,
        }
    }

    fn hourly(day: u32, hour: u8, season: Season, count: u32) -> HourlyRecord {
        HourlyRecord {
            date: date(2011, 1, day),
            hour,
            season,
            count,
            registered: count,
            casual: 0,
        }
    }

    fn full_range() -> DateRange {
        DateRange::new(date(2011, 1, 1), date(2011, 1, 31))
    }

    #[test]
    fn hourly_totals_cover_distinct_hours_and_sort_descending() {
        let datasets = RentalDatasets::new(
            Vec::new(),
            vec![
                hourly(1, 3, Season::Spring, 2),
                hourly(1, 8, Season::Spring, 30),
                hourly(2, 8, Season::Spring, 20),
                hourly(2, 3, Season::Spring, 3),
            ],
        );

        let report = RentalReport::build(&datasets, full_range());

        assert_eq!(report.hourly_totals_by_hour, vec![(3, 5), (8, 50)]);
        assert_eq!(report.hourly_totals_by_volume, vec![(8, 50), (3, 5)]);
    }

    #[test]
    fn volume_sort_breaks_ties_on_the_lower_hour() {
        let datasets = RentalDatasets::new(
            Vec::new(),
            vec![
                hourly(1, 17, Season::Summer, 10),
                hourly(1, 8, Season::Summer, 10),
                hourly(1, 12, Season::Summer, 25),
            ],
        );

        let report = RentalReport::build(&datasets, full_range());
        assert_eq!(
            report.hourly_totals_by_volume,
            vec![(12, 25), (8, 10), (17, 10)]
        );
    }

    #[test]
    fn season_totals_sum_the_hourly_table() {
        let datasets = RentalDatasets::new(
            Vec::new(),
            vec![
                hourly(1, 8, Season::Winter, 7),
                hourly(2, 9, Season::Spring, 4),
                hourly(3, 10, Season::Winter, 3),
            ],
        );

        let report = RentalReport::build(&datasets, full_range());
        assert_eq!(
            report.season_totals,
            vec![(Season::Spring, 4), (Season::Winter, 10)]
        );
    }

    #[test]
    fn summary_metrics_sum_the_filtered_daily_rows() {
        let datasets = RentalDatasets::new(
            vec![daily(1, 10, 8, 2), daily(2, 20, 15, 5)],
            Vec::new(),
        );

        let range = DateRange::new(date(2011, 1, 1), date(2011, 1, 2));
        let report = RentalReport::build(&datasets, range);

        assert_eq!(report.total_rentals, 30);
        assert_eq!(report.total_registered, 23);
        assert_eq!(report.total_casual, 7);

        // Recomputation over the same inputs is idempotent.
        let again = RentalReport::build(&datasets, range);
        assert_eq!(again.total_rentals, report.total_rentals);
    }

    #[test]
    fn inverted_range_yields_empty_tables_and_zero_metrics() {
        let datasets = RentalDatasets::new(
            vec![daily(1, 10, 8, 2)],
            vec![hourly(1, 8, Season::Spring, 10)],
        );

        let range = DateRange::new(date(2011, 1, 2), date(2011, 1, 1));
        let report = RentalReport::build(&datasets, range);

        assert!(report.hourly_totals_by_hour.is_empty());
        assert!(report.season_totals.is_empty());
        assert!(report.daily_series.is_empty());
        assert_eq!(report.total_rentals, 0);
        assert_eq!(report.total_registered, 0);
        assert_eq!(report.total_casual, 0);
    }

    #[test]
    fn summary_limits_hour_charts_to_five_entries() {
        let rows = (0..12)
            .map(|hour| hourly(1, hour, Season::Fall, u32::from(hour) + 1))
            .collect();
        let datasets = RentalDatasets::new(Vec::new(), rows);

        let summary = RentalReport::build(&datasets, full_range()).summary();

        assert_eq!(summary.busiest_hours.len(), TOP_HOUR_ENTRIES);
        assert_eq!(summary.busiest_hours[0].hour, 11);
        assert_eq!(summary.quietest_hours.len(), TOP_HOUR_ENTRIES);
        // Quietest chart reads the grouped base in ascending hour order.
        assert_eq!(summary.quietest_hours[0].hour, 0);
        assert_eq!(summary.quietest_hours[4].hour, 4);
    }

    #[test]
    fn summary_sorts_seasons_descending_by_label() {
        let datasets = RentalDatasets::new(
            Vec::new(),
            vec![
                hourly(1, 8, Season::Spring, 1),
                hourly(2, 8, Season::Summer, 2),
                hourly(3, 8, Season::Fall, 3),
                hourly(4, 8, Season::Winter, 4),
            ],
        );

        let summary = RentalReport::build(&datasets, full_range()).summary();
        let labels: Vec<&str> = summary
            .season_totals
            .iter()
            .map(|entry| entry.season_label)
            .collect();
        assert_eq!(labels, vec!["Winter", "Summer", "Spring", "Fall"]);
    }

    #[test]
    fn summary_carries_the_fixed_user_split() {
        let datasets = RentalDatasets::new(vec![daily(1, 10, 8, 2)], Vec::new());
        let summary = RentalReport::build(&datasets, full_range()).summary();

        assert!(summary.user_split.illustrative);
        assert!((summary.user_split.casual_pct - 18.8).abs() < f32::EPSILON);
        assert!((summary.user_split.registered_pct - 81.2).abs() < f32::EPSILON);
    }
}
