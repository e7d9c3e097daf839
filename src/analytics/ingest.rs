use crate::analytics::rentals::{DailyRecord, HourlyRecord, RentalDatasets, Season};
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Daily,
    Hourly,
}

impl TableKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Hourly => "hourly",
        }
    }
}

#[derive(Debug)]
pub enum DatasetImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidDate {
        table: TableKind,
        record: u64,
        value: String,
    },
    InvalidSeason {
        table: TableKind,
        record: u64,
        value: String,
    },
    HourOutOfRange {
        record: u64,
        value: u16,
    },
    EmptyTable {
        table: TableKind,
    },
}

impl std::fmt::Display for DatasetImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetImportError::Io(err) => write!(f, "failed to read rental dataset: {}", err),
            DatasetImportError::Csv(err) => write!(f, "invalid rental CSV data: {}", err),
            DatasetImportError::InvalidDate {
                table,
                record,
                value,
            } => write!(
                f,
                "{} table record {}: '{}' is not a YYYY-MM-DD date",
                table.label(),
                record,
                value
            ),
            DatasetImportError::InvalidSeason {
                table,
                record,
                value,
            } => write!(
                f,
                "{} table record {}: unknown season '{}'",
                table.label(),
                record,
                value
            ),
            DatasetImportError::HourOutOfRange { record, value } => write!(
                f,
                "hourly table record {}: hour {} is outside 0-23",
                record, value
            ),
            DatasetImportError::EmptyTable { table } => {
                write!(f, "{} table contains no records", table.label())
            }
        }
    }
}

impl std::error::Error for DatasetImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetImportError::Io(err) => Some(err),
            DatasetImportError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DatasetImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for DatasetImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct DayRow {
    date: String,
    season: String,
    count: u32,
    registered: u32,
    casual: u32,
}

#[derive(Debug, Deserialize)]
struct HourRow {
    date: String,
    hour: u16,
    season: String,
    count: u32,
    registered: u32,
    casual: u32,
}

/// Loads the two cleaned rental tables. Any malformed or missing field fails
/// the whole load with the offending record number; nothing is skipped or
/// defaulted.
pub struct RentalDataImporter;

impl RentalDataImporter {
    pub fn from_paths<P: AsRef<Path>, Q: AsRef<Path>>(
        daily: P,
        hourly: Q,
    ) -> Result<RentalDatasets, DatasetImportError> {
        let daily_file = std::fs::File::open(daily)?;
        let hourly_file = std::fs::File::open(hourly)?;
        Self::from_readers(daily_file, hourly_file)
    }

    pub fn from_readers<R: Read, S: Read>(
        daily: R,
        hourly: S,
    ) -> Result<RentalDatasets, DatasetImportError> {
        let daily = read_daily(daily)?;
        let hourly = read_hourly(hourly)?;
        Ok(RentalDatasets::new(daily, hourly))
    }
}

fn read_daily<R: Read>(reader: R) -> Result<Vec<DailyRecord>, DatasetImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<DayRow>().enumerate() {
        let record = index as u64 + 1;
        let row = row?;
        records.push(DailyRecord {
            date: parse_date(TableKind::Daily, record, &row.date)?,
            season: parse_season(TableKind::Daily, record, &row.season)?,
            count: row.count,
            registered: row.registered,
            casual: row.casual,
        });
    }

    if records.is_empty() {
        return Err(DatasetImportError::EmptyTable {
            table: TableKind::Daily,
        });
    }

    Ok(records)
}

fn read_hourly<R: Read>(reader: R) -> Result<Vec<HourlyRecord>, DatasetImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<HourRow>().enumerate() {
        let record = index as u64 + 1;
        let row = row?;

        if row.hour > 23 {
            return Err(DatasetImportError::HourOutOfRange {
                record,
                value: row.hour,
            });
        }

        records.push(HourlyRecord {
            date: parse_date(TableKind::Hourly, record, &row.date)?,
            hour: row.hour as u8,
            season: parse_season(TableKind::Hourly, record, &row.season)?,
            count: row.count,
            registered: row.registered,
            casual: row.casual,
        });
    }

    if records.is_empty() {
        return Err(DatasetImportError::EmptyTable {
            table: TableKind::Hourly,
        });
    }

    Ok(records)
}

fn parse_date(
    table: TableKind,
    record: u64,
    value: &str,
) -> Result<NaiveDate, DatasetImportError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        DatasetImportError::InvalidDate {
            table,
            record,
            value: value.to_string(),
        }
    })
}

fn parse_season(
    table: TableKind,
    record: u64,
    value: &str,
) -> Result<Season, DatasetImportError> {
    Season::parse(value).ok_or_else(|| DatasetImportError::InvalidSeason {
        table,
        record,
        value: value.to_string(),
    })
}
