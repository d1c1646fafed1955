use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        appointment::{
            AppointmentDto, ConfirmationDto, CreateAppointmentDto, UpdateAppointmentDto,
        },
    },
    server::{
        error::AppError,
        model::appointment::{Appointment, AppointmentPatch, CreateAppointmentParams},
        service::appointment::AppointmentService,
        state::AppState,
    },
};

/// Tag for grouping appointment endpoints in OpenAPI documentation
pub static APPOINTMENT_TAG: &str = "appointment";

fn not_found() -> AppError {
    AppError::NotFound("Appointment not found".to_string())
}

/// List all appointments.
#[utoipa::path(
    get,
    path = "/api/appointments",
    tag = APPOINTMENT_TAG,
    responses(
        (status = 200, description = "All appointments", body = Vec<AppointmentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointments(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = AppointmentService::new(&*state.store, &state.locks);

    let dtos: Vec<AppointmentDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(Appointment::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get an appointment by ID.
#[utoipa::path(
    get,
    path = "/api/appointments/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = String, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment details", body = AppointmentDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointment_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = AppointmentService::new(&*state.store, &state.locks);

    let appointment = service.get_by_id(&id).await?.ok_or_else(not_found)?;

    Ok((StatusCode::OK, Json(appointment.into_dto())))
}

/// Book an appointment.
///
/// The appointment always starts as `pendente`, whatever status the body carries. Legacy
/// `date`/`time` keys are accepted, and the total defaults to the sum of the procedure
/// values.
///
/// # Returns
/// - `201 Created` - Appointment booked
/// - `400 Bad Request` - Missing clientId, date or time, or invalid date
#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = APPOINTMENT_TAG,
    request_body = CreateAppointmentDto,
    responses(
        (status = 201, description = "Appointment booked", body = AppointmentDto),
        (status = 400, description = "Invalid appointment data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(payload): Json<CreateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateAppointmentParams::from_dto(payload)?;

    let service = AppointmentService::new(&*state.store, &state.locks);
    let appointment = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(appointment.into_dto())))
}

/// Update an appointment's details.
///
/// Status cannot be changed here; use the confirm and cancel endpoints.
///
/// # Returns
/// - `200 OK` - Updated appointment
/// - `400 Bad Request` - Invalid field value
/// - `404 Not Found` - Appointment not found
/// - `422 Unprocessable Entity` - Unknown field in body, including `status`
#[utoipa::path(
    put,
    path = "/api/appointments/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = String, Path, description = "Appointment ID")),
    request_body = UpdateAppointmentDto,
    responses(
        (status = 200, description = "Appointment updated", body = AppointmentDto),
        (status = 400, description = "Invalid appointment data", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let patch = AppointmentPatch::from_dto(payload)?;

    let service = AppointmentService::new(&*state.store, &state.locks);
    let appointment = service.update(&id, patch).await?.ok_or_else(not_found)?;

    Ok((StatusCode::OK, Json(appointment.into_dto())))
}

/// Delete an appointment.
///
/// Transactions generated from the appointment are kept.
#[utoipa::path(
    delete,
    path = "/api/appointments/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = String, Path, description = "Appointment ID")),
    responses(
        (status = 204, description = "Appointment deleted"),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = AppointmentService::new(&*state.store, &state.locks);

    if !service.delete(&id).await? {
        return Err(not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Confirm a pending appointment.
///
/// Creates the revenue transaction for the appointment unless one already exists.
///
/// # Returns
/// - `200 OK` - Appointment confirmed
/// - `400 Bad Request` - Appointment already confirmed or cancelled
/// - `404 Not Found` - Appointment not found
#[utoipa::path(
    put,
    path = "/api/appointments/{id}/confirm",
    tag = APPOINTMENT_TAG,
    params(("id" = String, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment confirmed", body = ConfirmationDto),
        (status = 400, description = "Appointment cannot be confirmed", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = AppointmentService::new(&*state.store, &state.locks);

    let confirmation = service.confirm(&id).await?;

    let dto = ConfirmationDto {
        message: confirmation.message().to_string(),
        appointment: confirmation.appointment.into_dto(),
        transaction: confirmation.transaction.map(|t| t.into_dto()),
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// Cancel a pending appointment.
///
/// # Returns
/// - `200 OK` - Appointment cancelled
/// - `400 Bad Request` - Appointment already cancelled or confirmed
/// - `404 Not Found` - Appointment not found
#[utoipa::path(
    put,
    path = "/api/appointments/{id}/cancel",
    tag = APPOINTMENT_TAG,
    params(("id" = String, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment cancelled", body = AppointmentDto),
        (status = 400, description = "Appointment cannot be cancelled", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = AppointmentService::new(&*state.store, &state.locks);

    let appointment = service.cancel(&id).await?;

    Ok((StatusCode::OK, Json(appointment.into_dto())))
}
