mod cli;
mod demo;
mod infra;
mod routes;
mod server;

pub mod analytics;
pub mod config;
pub mod error;
pub mod telemetry;

use error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
