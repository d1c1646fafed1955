use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::appointment::ProcedureSnapshotDto;

/// Appointment joined with its client name and display-formatted date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AppointmentReportDto {
    pub id: String,
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "clienteNome")]
    pub cliente_nome: String,
    pub procedimentos: Vec<ProcedureSnapshotDto>,
    /// Date as `dd/mm/yyyy`, or `N/A` when the stored date cannot be read.
    pub data: String,
    pub hora: String,
    pub status: String,
    #[serde(rename = "valorTotal")]
    pub valor_total: f64,
}

/// Revenue and expense totals rendered with two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FinancialReportDto {
    pub receitas: String,
    pub despesas: String,
}
