//! Report models: enriched appointments and financial totals.

use std::collections::HashMap;

use crate::{
    model::{
        appointment::ProcedureSnapshotDto,
        report::{AppointmentReportDto, FinancialReportDto},
    },
    server::{
        model::appointment::{Appointment, AppointmentStatus, ProcedureSnapshot},
        util::period,
    },
};

pub const UNKNOWN_CLIENT: &str = "Cliente Desconhecido";
pub const UNKNOWN_PROCEDURE: &str = "Procedimento Desconhecido";

/// Appointment joined with client and procedure names for display.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentReport {
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    pub procedimentos: Vec<ProcedureSnapshot>,
    /// `dd/mm/yyyy` or `N/A`.
    pub data: String,
    /// Stored time or `N/A`.
    pub hora: String,
    pub status: AppointmentStatus,
    pub valor_total: f64,
}

impl AppointmentReport {
    /// Resolves names against lookup tables keyed by id.
    ///
    /// Procedures are named from the catalogue when the id resolves, from the snapshot
    /// otherwise, and `Procedimento Desconhecido` as a last resort. Values always come
    /// from the snapshot.
    pub fn enrich(
        appointment: Appointment,
        client_names: &HashMap<String, String>,
        procedure_names: &HashMap<String, String>,
    ) -> Self {
        let client_name = client_names
            .get(&appointment.client_id)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_CLIENT.to_string());

        let procedimentos = appointment
            .procedimentos
            .into_iter()
            .map(|snapshot| {
                let nome = procedure_names
                    .get(&snapshot.id)
                    .cloned()
                    .or_else(|| Some(snapshot.nome.clone()).filter(|n| !n.trim().is_empty()))
                    .unwrap_or_else(|| UNKNOWN_PROCEDURE.to_string());

                ProcedureSnapshot { nome, ..snapshot }
            })
            .collect();

        let hora = if appointment.hora.trim().is_empty() {
            period::UNKNOWN_DATE.to_string()
        } else {
            appointment.hora
        };

        Self {
            id: appointment.id,
            client_id: appointment.client_id,
            client_name,
            procedimentos,
            data: period::format_display(&appointment.data),
            hora,
            status: appointment.status,
            valor_total: appointment.valor_total,
        }
    }

    pub fn into_dto(self) -> AppointmentReportDto {
        AppointmentReportDto {
            id: self.id,
            client_id: self.client_id,
            cliente_nome: self.client_name,
            procedimentos: self
                .procedimentos
                .into_iter()
                .map(|p| ProcedureSnapshotDto {
                    id: p.id,
                    nome: p.nome,
                    valor: p.valor,
                })
                .collect(),
            data: self.data,
            hora: self.hora,
            status: self.status.to_string(),
            valor_total: self.valor_total,
        }
    }
}

/// Summed revenue and expenses for a period.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FinancialTotals {
    pub receitas: f64,
    pub despesas: f64,
}

impl FinancialTotals {
    pub fn into_dto(self) -> FinancialReportDto {
        FinancialReportDto {
            receitas: format!("{:.2}", self.receitas),
            despesas: format!("{:.2}", self.despesas),
        }
    }
}
