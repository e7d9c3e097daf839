use super::super::domain::Season;
use chrono::NaiveDate;
use serde::Serialize;

/// Number of entries shown in the busiest/quietest hour charts.
pub const TOP_HOUR_ENTRIES: usize = 5;

/// Fixed casual/registered shares shown by the customer-split pie. These are
/// illustrative constants, NOT derived from the filtered data; the view keeps
/// them labelled as such so the inconsistency stays visible to stakeholders.
pub const CASUAL_SHARE_PCT: f32 = 18.8;
pub const REGISTERED_SHARE_PCT: f32 = 81.2;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RentalTotals {
    pub total_rentals: u64,
    pub total_registered: u64,
    pub total_casual: u64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct HourVolumeEntry {
    pub hour: u8,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeasonVolumeEntry {
    pub season: Season,
    pub season_label: &'static str,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct UserSplit {
    pub casual_pct: f32,
    pub registered_pct: f32,
    pub illustrative: bool,
}

impl UserSplit {
    pub const fn fixed() -> Self {
        Self {
            casual_pct: CASUAL_SHARE_PCT,
            registered_pct: REGISTERED_SHARE_PCT,
            illustrative: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RentalReportSummary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub totals: RentalTotals,
    pub daily_series: Vec<DailyPoint>,
    pub registered_by_date: Vec<DailyPoint>,
    pub casual_by_date: Vec<DailyPoint>,
    pub busiest_hours: Vec<HourVolumeEntry>,
    pub quietest_hours: Vec<HourVolumeEntry>,
    pub season_totals: Vec<SeasonVolumeEntry>,
    pub user_split: UserSplit,
}
