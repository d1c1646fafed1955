use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        client::{ClientDto, ClientOptionDto, CreateClientDto, UpdateClientDto},
    },
    server::{
        error::AppError,
        model::client::{Client, ClientPatch, CreateClientParams},
        service::client::ClientService,
        state::AppState,
    },
};

/// Tag for grouping client endpoints in OpenAPI documentation
pub static CLIENT_TAG: &str = "client";

fn not_found() -> AppError {
    AppError::NotFound("Client not found".to_string())
}

/// List all clients.
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = CLIENT_TAG,
    responses(
        (status = 200, description = "All clients", body = Vec<ClientDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clients(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let clients = ClientService::new(&*state.store, &state.locks).get_all().await?;

    let dtos: Vec<ClientDto> = clients.into_iter().map(Client::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a client by ID.
#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    tag = CLIENT_TAG,
    params(("id" = String, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client details", body = ClientDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_client_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let client = ClientService::new(&*state.store, &state.locks)
        .get_by_id(&id)
        .await?
        .ok_or_else(not_found)?;

    Ok((StatusCode::OK, Json(client.into_dto())))
}

/// Register a new client.
///
/// The phone number is stored as digits only and must be unique among clients.
///
/// # Returns
/// - `201 Created` - Client created
/// - `400 Bad Request` - Name or phone missing
/// - `409 Conflict` - Phone number already registered
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = CLIENT_TAG,
    request_body = CreateClientDto,
    responses(
        (status = 201, description = "Client created", body = ClientDto),
        (status = 400, description = "Name or phone missing", body = ErrorDto),
        (status = 409, description = "Phone number already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_client(
    State(state): State<AppState>,
    Json(payload): Json<CreateClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateClientParams::from_dto(payload)?;

    let client = ClientService::new(&*state.store, &state.locks).create(params).await?;

    Ok((StatusCode::CREATED, Json(client.into_dto())))
}

/// Update a client.
///
/// Only the fields present in the body change. A new phone number is normalised and
/// checked against other clients.
///
/// # Returns
/// - `200 OK` - Updated client
/// - `400 Bad Request` - Blank name or phone
/// - `404 Not Found` - Client not found
/// - `409 Conflict` - Phone number belongs to another client
#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    tag = CLIENT_TAG,
    params(("id" = String, Path, description = "Client ID")),
    request_body = UpdateClientDto,
    responses(
        (status = 200, description = "Client updated", body = ClientDto),
        (status = 400, description = "Invalid client data", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 409, description = "Phone number already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let patch = ClientPatch::from_dto(payload)?;

    let client = ClientService::new(&*state.store, &state.locks)
        .update(&id, patch)
        .await?
        .ok_or_else(not_found)?;

    Ok((StatusCode::OK, Json(client.into_dto())))
}

/// Delete a client.
///
/// Appointments that reference the client are kept.
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    tag = CLIENT_TAG,
    params(("id" = String, Path, description = "Client ID")),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !ClientService::new(&*state.store, &state.locks).delete(&id).await? {
        return Err(not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}

/// List clients as `{id, name}` pairs for selection lists.
#[utoipa::path(
    get,
    path = "/api/clients-dropdown",
    tag = CLIENT_TAG,
    responses(
        (status = 200, description = "Client options", body = Vec<ClientOptionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_client_options(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let clients = ClientService::new(&*state.store, &state.locks).get_all().await?;

    let options: Vec<ClientOptionDto> = clients.into_iter().map(Client::into_option_dto).collect();

    Ok((StatusCode::OK, Json(options)))
}
