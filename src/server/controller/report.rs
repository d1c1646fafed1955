use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        report::{AppointmentReportDto, FinancialReportDto},
    },
    server::{
        error::AppError, model::report::AppointmentReport, service::report::ReportService,
        state::AppState,
    },
};

/// Tag for grouping report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

#[derive(Deserialize)]
pub struct ReferenceDateParams {
    pub date: Option<String>,
}

#[derive(Deserialize)]
pub struct FinancialPeriodParams {
    pub period: Option<String>,
}

/// Appointments with a given status.
///
/// Each appointment is enriched with the client name, resolved procedure names and a
/// `dd/mm/yyyy` date.
///
/// # Returns
/// - `200 OK` - Matching appointments
/// - `400 Bad Request` - Status is not pendente, confirmado or cancelado
#[utoipa::path(
    get,
    path = "/api/reports/status/{status}",
    tag = REPORT_TAG,
    params(("status" = String, Path, description = "pendente, confirmado or cancelado")),
    responses(
        (status = 200, description = "Matching appointments", body = Vec<AppointmentReportDto>),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointments_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let reports = ReportService::new(&*state.store).by_status(&status).await?;

    let dtos: Vec<AppointmentReportDto> = reports
        .into_iter()
        .map(AppointmentReport::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Appointments in the day, week (Sunday to Saturday) or month of a reference date.
///
/// # Returns
/// - `200 OK` - Matching appointments
/// - `400 Bad Request` - Invalid period, or missing or invalid reference date
#[utoipa::path(
    get,
    path = "/api/reports/appointments/{period}",
    tag = REPORT_TAG,
    params(
        ("period" = String, Path, description = "dia, semana or mes"),
        ("date" = String, Query, description = "Reference date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Matching appointments", body = Vec<AppointmentReportDto>),
        (status = 400, description = "Invalid period or reference date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointments_by_period(
    State(state): State<AppState>,
    Path(period): Path<String>,
    Query(params): Query<ReferenceDateParams>,
) -> Result<impl IntoResponse, AppError> {
    let reports = ReportService::new(&*state.store)
        .by_period(&period, params.date.as_deref())
        .await?;

    let dtos: Vec<AppointmentReportDto> = reports
        .into_iter()
        .map(AppointmentReport::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Revenue and expense totals for today's day, week or month, or for all time.
///
/// # Returns
/// - `200 OK` - Totals as two-decimal strings
/// - `400 Bad Request` - Invalid period
#[utoipa::path(
    get,
    path = "/api/reports/financial",
    tag = REPORT_TAG,
    params(("period" = Option<String>, Query, description = "day, week, month or total (default: total)")),
    responses(
        (status = 200, description = "Financial totals", body = FinancialReportDto),
        (status = 400, description = "Invalid period", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_financial_report(
    State(state): State<AppState>,
    Query(params): Query<FinancialPeriodParams>,
) -> Result<impl IntoResponse, AppError> {
    let today = chrono::Local::now().date_naive();

    let totals = ReportService::new(&*state.store)
        .financial_totals(params.period.as_deref(), today)
        .await?;

    Ok((StatusCode::OK, Json(totals.into_dto())))
}
