use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Appointment status changes rejected by the lifecycle.
///
/// `confirmado` and `cancelado` are terminal, so every variant describes an attempt to
/// leave a terminal state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Appointment is already confirmed")]
    AlreadyConfirmed,

    #[error("Appointment is cancelled and cannot be confirmed")]
    CancelledCannotConfirm,

    #[error("Appointment is already cancelled")]
    AlreadyCancelled,

    #[error("Appointment is confirmed and cannot be cancelled")]
    ConfirmedCannotCancel,
}

impl IntoResponse for TransitionError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
