mod dataset;
pub mod domain;
pub mod report;

pub use dataset::RentalDatasets;
pub use domain::{DailyRecord, DateRange, HourlyRecord, Season};
pub use report::RentalReport;
