use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        transaction::{CreateTransactionDto, TransactionDto, UpdateTransactionDto},
    },
    server::{
        error::AppError,
        model::transaction::{CreateTransactionParams, Transaction, TransactionPatch},
        service::transaction::TransactionService,
        state::AppState,
    },
};

/// Tag for grouping transaction endpoints in OpenAPI documentation
pub static TRANSACTION_TAG: &str = "transaction";

fn not_found() -> AppError {
    AppError::NotFound("Transaction not found".to_string())
}

/// List all transactions.
#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = TRANSACTION_TAG,
    responses(
        (status = 200, description = "All transactions", body = Vec<TransactionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transactions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let transactions = TransactionService::new(&*state.store, &state.locks).get_all().await?;

    let dtos: Vec<TransactionDto> = transactions
        .into_iter()
        .map(Transaction::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a transaction by ID.
#[utoipa::path(
    get,
    path = "/api/transactions/{id}",
    tag = TRANSACTION_TAG,
    params(("id" = String, Path, description = "Transaction ID")),
    responses(
        (status = 200, description = "Transaction details", body = TransactionDto),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transaction_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let transaction = TransactionService::new(&*state.store, &state.locks)
        .get_by_id(&id)
        .await?
        .ok_or_else(not_found)?;

    Ok((StatusCode::OK, Json(transaction.into_dto())))
}

/// Record a transaction.
///
/// `tipo` and `valor` are required. The origin defaults to `manual`, the category to
/// `Outros` and the date to today.
///
/// # Returns
/// - `201 Created` - Transaction recorded
/// - `400 Bad Request` - Missing or invalid fields
/// - `409 Conflict` - Revenue already recorded for the referenced appointment
#[utoipa::path(
    post,
    path = "/api/transactions",
    tag = TRANSACTION_TAG,
    request_body = CreateTransactionDto,
    responses(
        (status = 201, description = "Transaction recorded", body = TransactionDto),
        (status = 400, description = "Invalid transaction data", body = ErrorDto),
        (status = 409, description = "Revenue already recorded for appointment", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_transaction(
    State(state): State<AppState>,
    Json(payload): Json<CreateTransactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let today = chrono::Local::now().date_naive();
    let params = CreateTransactionParams::from_dto(payload, today)?;

    let transaction = TransactionService::new(&*state.store, &state.locks).create(params).await?;

    Ok((StatusCode::CREATED, Json(transaction.into_dto())))
}

/// Update a transaction.
///
/// The origin and its appointment reference cannot be changed.
#[utoipa::path(
    put,
    path = "/api/transactions/{id}",
    tag = TRANSACTION_TAG,
    params(("id" = String, Path, description = "Transaction ID")),
    request_body = UpdateTransactionDto,
    responses(
        (status = 200, description = "Transaction updated", body = TransactionDto),
        (status = 400, description = "Invalid transaction data", body = ErrorDto),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTransactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let patch = TransactionPatch::from_dto(payload)?;

    let transaction = TransactionService::new(&*state.store, &state.locks)
        .update(&id, patch)
        .await?
        .ok_or_else(not_found)?;

    Ok((StatusCode::OK, Json(transaction.into_dto())))
}

/// Delete a transaction.
#[utoipa::path(
    delete,
    path = "/api/transactions/{id}",
    tag = TRANSACTION_TAG,
    params(("id" = String, Path, description = "Transaction ID")),
    responses(
        (status = 204, description = "Transaction deleted"),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !TransactionService::new(&*state.store, &state.locks).delete(&id).await? {
        return Err(not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}
