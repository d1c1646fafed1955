use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{lenient, transaction::TransactionDto};

/// Copy of a procedure's id, name and price taken when the appointment was booked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProcedureSnapshotDto {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, alias = "name", deserialize_with = "lenient::text")]
    pub nome: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub valor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AppointmentDto {
    pub id: String,
    #[serde(rename = "clientId")]
    pub client_id: String,
    pub procedimentos: Vec<ProcedureSnapshotDto>,
    pub data: String,
    pub hora: String,
    pub status: String,
    #[serde(rename = "valorTotal")]
    pub valor_total: f64,
}

/// Booking request. Any `status` sent by the caller is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateAppointmentDto {
    #[serde(
        default,
        rename = "clientId",
        deserialize_with = "lenient::option_text"
    )]
    pub client_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub procedimentos: Vec<ProcedureSnapshotDto>,
    #[serde(default, alias = "date", deserialize_with = "lenient::option_text")]
    pub data: Option<String>,
    #[serde(default, alias = "time", deserialize_with = "lenient::option_text")]
    pub hora: Option<String>,
    #[serde(
        default,
        rename = "valorTotal",
        deserialize_with = "lenient::option_number"
    )]
    pub valor_total: Option<f64>,
}

/// Partial appointment update. Status changes go through confirm/cancel only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateAppointmentDto {
    #[serde(
        default,
        rename = "clientId",
        deserialize_with = "lenient::option_text"
    )]
    pub client_id: Option<String>,
    #[serde(default)]
    pub procedimentos: Option<Vec<ProcedureSnapshotDto>>,
    #[serde(default, alias = "date", deserialize_with = "lenient::option_text")]
    pub data: Option<String>,
    #[serde(default, alias = "time", deserialize_with = "lenient::option_text")]
    pub hora: Option<String>,
    #[serde(
        default,
        rename = "valorTotal",
        deserialize_with = "lenient::option_number"
    )]
    pub valor_total: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConfirmationDto {
    pub message: String,
    pub appointment: AppointmentDto,
    /// Revenue transaction created by this confirmation; absent when one already existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction: Option<TransactionDto>,
}
