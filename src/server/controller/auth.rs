use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        error::AppError,
        model::user::{LoginParams, RegisterParams},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new user.
///
/// Stores the account with a salted password hash. No session is created.
///
/// # Returns
/// - `201 Created` - User registered
/// - `400 Bad Request` - Username, email or password missing
/// - `409 Conflict` - Username or email already registered
#[utoipa::path(
    post,
    path = "/api/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User registered", body = UserDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 409, description = "Username or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterParams::from_dto(payload)?;

    let user = AuthService::new(&*state.store, &state.locks).register(params).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Check user credentials.
///
/// Unknown users and wrong passwords produce the same response. No session or token
/// is issued on success.
///
/// # Returns
/// - `200 OK` - Credentials valid
/// - `401 Unauthorized` - Invalid credentials
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Credentials valid", body = MessageDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&*state.store, &state.locks)
        .login(LoginParams::from_dto(payload))
        .await?;

    tracing::info!("User {} logged in", user.username);

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Login successful".to_string(),
        }),
    ))
}
