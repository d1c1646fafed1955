use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        procedure::{CreateProcedureDto, ProcedureDto},
    },
    server::{
        error::AppError,
        model::procedure::{CreateProcedureParams, Procedure},
        service::procedure::ProcedureService,
        state::AppState,
    },
};

/// Tag for grouping procedure endpoints in OpenAPI documentation
pub static PROCEDURE_TAG: &str = "procedure";

/// List the procedure catalogue.
#[utoipa::path(
    get,
    path = "/api/procedures",
    tag = PROCEDURE_TAG,
    responses(
        (status = 200, description = "All procedures", body = Vec<ProcedureDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_procedures(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let procedures = ProcedureService::new(&*state.store, &state.locks).get_all().await?;

    let dtos: Vec<ProcedureDto> = procedures.into_iter().map(Procedure::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Add a procedure to the catalogue.
///
/// # Returns
/// - `201 Created` - Procedure created
/// - `400 Bad Request` - Name missing or negative price
/// - `409 Conflict` - A procedure with the same name exists
#[utoipa::path(
    post,
    path = "/api/procedures",
    tag = PROCEDURE_TAG,
    request_body = CreateProcedureDto,
    responses(
        (status = 201, description = "Procedure created", body = ProcedureDto),
        (status = 400, description = "Invalid procedure data", body = ErrorDto),
        (status = 409, description = "Procedure name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_procedure(
    State(state): State<AppState>,
    Json(payload): Json<CreateProcedureDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateProcedureParams::from_dto(payload)?;

    let procedure = ProcedureService::new(&*state.store, &state.locks).create(params).await?;

    Ok((StatusCode::CREATED, Json(procedure.into_dto())))
}
