use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const fn ordered() -> [Self; 4] {
        [Self::Spring, Self::Summer, Self::Fall, Self::Winter]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
            Self::Winter => "Winter",
        }
    }

    /// Accepts the raw dataset's numeric codes (1-4) as well as
    /// case-insensitive season names.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "spring" | "springer" => Some(Self::Spring),
            "2" | "summer" => Some(Self::Summer),
            "3" | "fall" | "autumn" => Some(Self::Fall),
            "4" | "winter" => Some(Self::Winter),
            _ => None,
        }
    }
}

/// One row of the daily table. count = registered + casual is assumed of the
/// cleaned inputs, not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub season: Season,
    pub count: u32,
    pub registered: u32,
    pub casual: u32,
}

/// One row of the hourly table, keyed by (date, hour). hour is validated to
/// 0-23 at import time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourlyRecord {
    pub date: NaiveDate,
    pub hour: u8,
    pub season: Season,
    pub count: u32,
    pub registered: u32,
    pub casual: u32,
}

/// Closed date interval selected by the caller. An inverted interval
/// (start > end) is the empty range, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn season_parse_accepts_codes_and_names() {
        assert_eq!(Season::parse("1"), Some(Season::Spring));
        assert_eq!(Season::parse("springer"), Some(Season::Spring));
        assert_eq!(Season::parse(" Summer "), Some(Season::Summer));
        assert_eq!(Season::parse("autumn"), Some(Season::Fall));
        assert_eq!(Season::parse("4"), Some(Season::Winter));
        assert_eq!(Season::parse("monsoon"), None);
        assert_eq!(Season::parse("5"), None);
    }

    #[test]
    fn season_ordering_is_calendar_order() {
        let ordered = Season::ordered();
        assert_eq!(ordered[0], Season::Spring);
        assert_eq!(ordered[3], Season::Winter);
        assert!(Season::Spring < Season::Winter);
    }

    #[test]
    fn range_contains_is_closed_on_both_ends() {
        let range = DateRange::new(date(2011, 1, 1), date(2011, 1, 31));
        assert!(range.contains(date(2011, 1, 1)));
        assert!(range.contains(date(2011, 1, 31)));
        assert!(!range.contains(date(2010, 12, 31)));
        assert!(!range.contains(date(2011, 2, 1)));
    }

    #[test]
    fn inverted_range_is_empty_and_contains_nothing() {
        let range = DateRange::new(date(2011, 2, 1), date(2011, 1, 1));
        assert!(range.is_empty());
        assert!(!range.contains(date(2011, 1, 15)));
    }
}
