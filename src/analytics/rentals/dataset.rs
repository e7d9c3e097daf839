use super::domain::{DailyRecord, DateRange, HourlyRecord};
use chrono::NaiveDate;

/// The two immutable input tables, loaded once at process start and shared
/// read-only for the lifetime of the session. Every report is a pure
/// recomputation over this context.
#[derive(Debug, Default)]
pub struct RentalDatasets {
    daily: Vec<DailyRecord>,
    hourly: Vec<HourlyRecord>,
}

impl RentalDatasets {
    /// Sorts both tables by date on construction; the stable sort preserves
    /// intra-day hour order.
    pub fn new(mut daily: Vec<DailyRecord>, mut hourly: Vec<HourlyRecord>) -> Self {
        daily.sort_by_key(|record| record.date);
        hourly.sort_by_key(|record| record.date);
        Self { daily, hourly }
    }

    pub fn daily(&self) -> &[DailyRecord] {
        &self.daily
    }

    pub fn hourly(&self) -> &[HourlyRecord] {
        &self.hourly
    }

    /// Earliest and latest date of the daily table; the default report range
    /// when the caller does not supply one.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.daily.first()?.date;
        let last = self.daily.last()?.date;
        Some((first, last))
    }

    pub fn filter_daily(&self, range: &DateRange) -> Vec<&DailyRecord> {
        self.daily
            .iter()
            .filter(|record| range.contains(record.date))
            .collect()
    }

    pub fn filter_hourly(&self, range: &DateRange) -> Vec<&HourlyRecord> {
        self.hourly
            .iter()
            .filter(|record| range.contains(record.date))
            .collect()
    }
}
