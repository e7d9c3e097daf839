use crate::analytics::ingest::{DatasetImportError, RentalDataImporter, TableKind};
use crate::analytics::rentals::{DateRange, RentalReport};
use crate::config::AppConfig;
use crate::error::AppError;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Report start date (YYYY-MM-DD); defaults to the earliest daily record
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) start_date: Option<NaiveDate>,
    /// Report end date (YYYY-MM-DD); defaults to the latest daily record
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) end_date: Option<NaiveDate>,
    /// Override the configured daily CSV path
    #[arg(long)]
    pub(crate) daily_csv: Option<PathBuf>,
    /// Override the configured hourly CSV path
    #[arg(long)]
    pub(crate) hourly_csv: Option<PathBuf>,
    /// Append the full hourly volume table to the output
    #[arg(long)]
    pub(crate) list_hours: bool,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        start_date,
        end_date,
        daily_csv,
        hourly_csv,
        list_hours,
    } = args;

    let config = AppConfig::load()?;
    let daily_path = daily_csv.unwrap_or(config.data.daily_csv);
    let hourly_path = hourly_csv.unwrap_or(config.data.hourly_csv);

    let datasets = RentalDataImporter::from_paths(daily_path, hourly_path)?;
    let (first, last) = datasets.date_bounds().ok_or(AppError::Dataset(
        DatasetImportError::EmptyTable {
            table: TableKind::Daily,
        },
    ))?;

    let range = DateRange::new(start_date.unwrap_or(first), end_date.unwrap_or(last));
    let report = RentalReport::build(&datasets, range);
    render_report(&report, list_hours);

    Ok(())
}

fn render_report(report: &RentalReport, list_hours: bool) {
    let summary = report.summary();

    println!("Bike rental report");
    println!(
        "Date range: {} -> {}",
        summary.start_date, summary.end_date
    );

    println!("\nTotals");
    println!("- rentals: {}", summary.totals.total_rentals);
    println!("- registered: {}", summary.totals.total_registered);
    println!("- casual: {}", summary.totals.total_casual);

    if summary.busiest_hours.is_empty() {
        println!("\nBusiest hours: none (no hourly rows in range)");
    } else {
        println!("\nBusiest hours");
        for entry in &summary.busiest_hours {
            println!("- {:02}:00 -> {} rentals", entry.hour, entry.total);
        }
    }

    if summary.quietest_hours.is_empty() {
        println!("\nQuietest hours: none (no hourly rows in range)");
    } else {
        println!("\nQuietest hours");
        for entry in &summary.quietest_hours {
            println!("- {:02}:00 -> {} rentals", entry.hour, entry.total);
        }
    }

    if summary.season_totals.is_empty() {
        println!("\nRentals by season: none (no hourly rows in range)");
    } else {
        println!("\nRentals by season");
        for entry in &summary.season_totals {
            println!("- {}: {}", entry.season_label, entry.total);
        }
    }

    println!(
        "\nCustomer split (illustrative): casual {:.1}% / registered {:.1}%",
        summary.user_split.casual_pct, summary.user_split.registered_pct
    );

    if list_hours {
        println!("\nHourly volume, busiest first");
        for (hour, total) in &report.hourly_totals_by_volume {
            println!("- {:02}:00 | {}", hour, total);
        }
    }
}
