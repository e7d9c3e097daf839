use crate::analytics::ingest::{DatasetImportError, TableKind};
use crate::analytics::rentals::report::views::RentalReportSummary;
use crate::analytics::rentals::{DateRange, RentalReport};
use crate::error::AppError;
use crate::infra::{deserialize_optional_date, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub(crate) struct RentalReportRequest {
    /// Defaults to the earliest date of the daily table when omitted.
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) start_date: Option<NaiveDate>,
    /// Defaults to the latest date of the daily table when omitted.
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) end_date: Option<NaiveDate>,
}

pub(crate) fn router() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/rentals/report",
            axum::routing::post(rental_report_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn rental_report_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<RentalReportRequest>,
) -> Result<Json<RentalReportSummary>, AppError> {
    let (first, last) = state.datasets.date_bounds().ok_or(AppError::Dataset(
        DatasetImportError::EmptyTable {
            table: TableKind::Daily,
        },
    ))?;

    let range = DateRange::new(
        payload.start_date.unwrap_or(first),
        payload.end_date.unwrap_or(last),
    );

    let report = RentalReport::build(&state.datasets, range);
    Ok(Json(report.summary()))
}
