//! Appointment domain model and status lifecycle.
//!
//! An appointment starts `pendente` and may move once, either to `confirmado` or to
//! `cancelado`. Both are terminal. `AppointmentStatus::confirm` and
//! `AppointmentStatus::cancel` encode the allowed transitions; the confirm-time revenue
//! transaction is built by `crate::server::model::transaction`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    model::{
        appointment::{
            AppointmentDto, CreateAppointmentDto, ProcedureSnapshotDto, UpdateAppointmentDto,
        },
        lenient,
    },
    server::{
        error::{transition::TransitionError, AppError},
        util::{parse::non_blank, period},
    },
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Pendente,
    Confirmado,
    Cancelado,
}

impl AppointmentStatus {
    /// Parses a status name, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "pendente" => Some(Self::Pendente),
            "confirmado" => Some(Self::Confirmado),
            "cancelado" => Some(Self::Cancelado),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pendente => "pendente",
            Self::Confirmado => "confirmado",
            Self::Cancelado => "cancelado",
        }
    }

    /// Status after confirming, if the transition is allowed.
    pub fn confirm(self) -> Result<Self, TransitionError> {
        match self {
            Self::Pendente => Ok(Self::Confirmado),
            Self::Confirmado => Err(TransitionError::AlreadyConfirmed),
            Self::Cancelado => Err(TransitionError::CancelledCannotConfirm),
        }
    }

    /// Status after cancelling, if the transition is allowed.
    pub fn cancel(self) -> Result<Self, TransitionError> {
        match self {
            Self::Pendente => Ok(Self::Cancelado),
            Self::Confirmado => Err(TransitionError::ConfirmedCannotCancel),
            Self::Cancelado => Err(TransitionError::AlreadyCancelled),
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Missing or `null` status reads as `pendente`; unknown names are rejected.
impl<'de> Deserialize<'de> for AppointmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(Self::Pendente),
            Some(value) => Self::parse(&value).ok_or_else(|| {
                serde::de::Error::custom(format!("unknown appointment status '{}'", value))
            }),
        }
    }
}

/// Procedure id, name and price captured when the appointment was booked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcedureSnapshot {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub nome: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub valor: f64,
}

impl ProcedureSnapshot {
    pub fn into_dto(self) -> ProcedureSnapshotDto {
        ProcedureSnapshotDto {
            id: self.id,
            nome: self.nome,
            valor: self.valor,
        }
    }
}

impl From<ProcedureSnapshotDto> for ProcedureSnapshot {
    fn from(dto: ProcedureSnapshotDto) -> Self {
        Self {
            id: dto.id,
            nome: dto.nome.trim().to_string(),
            valor: dto.valor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    /// Soft reference to a client; may dangle after the client is deleted.
    #[serde(rename = "clientId", default, deserialize_with = "lenient::text")]
    pub client_id: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub procedimentos: Vec<ProcedureSnapshot>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub data: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub hora: String,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(rename = "valorTotal", default, deserialize_with = "lenient::number")]
    pub valor_total: f64,
}

impl Appointment {
    pub fn into_dto(self) -> AppointmentDto {
        AppointmentDto {
            id: self.id,
            client_id: self.client_id,
            procedimentos: self
                .procedimentos
                .into_iter()
                .map(ProcedureSnapshot::into_dto)
                .collect(),
            data: self.data,
            hora: self.hora,
            status: self.status.to_string(),
            valor_total: self.valor_total,
        }
    }
}

/// Sum of snapshot values.
pub fn total_of(procedimentos: &[ProcedureSnapshot]) -> f64 {
    procedimentos.iter().map(|p| p.valor).sum()
}

fn validated_date(value: String) -> Result<String, AppError> {
    period::parse_date(&value)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .ok_or_else(|| AppError::BadRequest(format!("Invalid appointment date '{}'", value)))
}

fn validated_total(total: f64) -> Result<f64, AppError> {
    if total < 0.0 {
        return Err(AppError::BadRequest(
            "Appointment total cannot be negative".to_string(),
        ));
    }
    Ok(total)
}

/// Validated booking. Always persisted with status `pendente`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateAppointmentParams {
    #[serde(rename = "clientId")]
    pub client_id: String,
    pub procedimentos: Vec<ProcedureSnapshot>,
    pub data: String,
    pub hora: String,
    pub status: AppointmentStatus,
    #[serde(rename = "valorTotal")]
    pub valor_total: f64,
}

impl CreateAppointmentParams {
    /// Validates a booking request.
    ///
    /// `clientId`, date and time are required. The date is stored as `YYYY-MM-DD` and the
    /// total defaults to the sum of the procedure snapshot values.
    pub fn from_dto(dto: CreateAppointmentDto) -> Result<Self, AppError> {
        let (Some(client_id), Some(data), Some(hora)) = (
            non_blank(dto.client_id),
            non_blank(dto.data),
            non_blank(dto.hora),
        ) else {
            return Err(AppError::BadRequest(
                "clientId, date and time are required".to_string(),
            ));
        };

        let procedimentos: Vec<ProcedureSnapshot> = dto
            .procedimentos
            .into_iter()
            .map(ProcedureSnapshot::from)
            .collect();
        let valor_total = validated_total(dto.valor_total.unwrap_or_else(|| total_of(&procedimentos)))?;

        Ok(Self {
            client_id,
            procedimentos,
            data: validated_date(data)?,
            hora,
            status: AppointmentStatus::Pendente,
            valor_total,
        })
    }
}

/// Fields to change on an existing appointment. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppointmentPatch {
    #[serde(rename = "clientId", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedimentos: Option<Vec<ProcedureSnapshot>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hora: Option<String>,
    #[serde(rename = "valorTotal", skip_serializing_if = "Option::is_none")]
    pub valor_total: Option<f64>,
}

impl AppointmentPatch {
    /// Validates an update request.
    ///
    /// Replacing the procedures without giving a total recomputes the total from the new
    /// snapshots.
    pub fn from_dto(dto: UpdateAppointmentDto) -> Result<Self, AppError> {
        let required = |value: Option<String>, field: &str| -> Result<Option<String>, AppError> {
            match value {
                Some(v) => non_blank(Some(v))
                    .map(Some)
                    .ok_or_else(|| AppError::BadRequest(format!("{} cannot be empty", field))),
                None => Ok(None),
            }
        };

        let client_id = required(dto.client_id, "clientId")?;
        let data = required(dto.data, "date")?.map(validated_date).transpose()?;
        let hora = required(dto.hora, "time")?;

        let procedimentos: Option<Vec<ProcedureSnapshot>> = dto
            .procedimentos
            .map(|list| list.into_iter().map(ProcedureSnapshot::from).collect());

        let valor_total = match (dto.valor_total, &procedimentos) {
            (Some(total), _) => Some(validated_total(total)?),
            (None, Some(list)) => Some(total_of(list)),
            (None, None) => None,
        };

        Ok(Self {
            client_id,
            procedimentos,
            data,
            hora,
            valor_total,
        })
    }
}

/// Status-only patch written by confirm and cancel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusPatch {
    pub status: AppointmentStatus,
}

/// Outcome of a successful confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub appointment: Appointment,
    /// Transaction created by this confirmation, or `None` if one already existed.
    pub transaction: Option<super::transaction::Transaction>,
}

impl Confirmation {
    pub fn message(&self) -> &'static str {
        if self.transaction.is_some() {
            "Appointment confirmed and revenue transaction created"
        } else {
            "Appointment confirmed (revenue transaction already exists)"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pending_can_confirm_or_cancel() {
        assert_eq!(
            AppointmentStatus::Pendente.confirm(),
            Ok(AppointmentStatus::Confirmado)
        );
        assert_eq!(
            AppointmentStatus::Pendente.cancel(),
            Ok(AppointmentStatus::Cancelado)
        );
    }

    #[test]
    fn terminal_states_reject_transitions() {
        assert_eq!(
            AppointmentStatus::Confirmado.confirm(),
            Err(TransitionError::AlreadyConfirmed)
        );
        assert_eq!(
            AppointmentStatus::Cancelado.confirm(),
            Err(TransitionError::CancelledCannotConfirm)
        );
        assert_eq!(
            AppointmentStatus::Cancelado.cancel(),
            Err(TransitionError::AlreadyCancelled)
        );
        assert_eq!(
            AppointmentStatus::Confirmado.cancel(),
            Err(TransitionError::ConfirmedCannotCancel)
        );
    }

    #[test]
    fn reads_legacy_document() {
        let appointment: Appointment = serde_json::from_value(json!({
            "id": 5,
            "clientId": 1,
            "procedimentos": [{ "id": 1, "nome": "Corte", "valor": "50" }],
            "data": "2025-05-21",
            "hora": "10:00",
            "status": "Confirmado",
            "valorTotal": "50.00"
        }))
        .unwrap();

        assert_eq!(appointment.id, "5");
        assert_eq!(appointment.client_id, "1");
        assert_eq!(appointment.procedimentos[0].valor, 50.0);
        assert_eq!(appointment.status, AppointmentStatus::Confirmado);
        assert_eq!(appointment.valor_total, 50.0);
    }

    #[test]
    fn missing_status_reads_as_pending() {
        let appointment: Appointment =
            serde_json::from_value(json!({ "id": "1", "status": null })).unwrap();

        assert_eq!(appointment.status, AppointmentStatus::Pendente);
        assert!(appointment.procedimentos.is_empty());
    }

    #[test]
    fn create_defaults_total_and_forces_pending() {
        let params = CreateAppointmentParams::from_dto(CreateAppointmentDto {
            client_id: Some("1".to_string()),
            procedimentos: vec![
                ProcedureSnapshotDto {
                    id: "1".to_string(),
                    nome: "Corte".to_string(),
                    valor: 50.0,
                },
                ProcedureSnapshotDto {
                    id: "2".to_string(),
                    nome: "Escova".to_string(),
                    valor: 30.0,
                },
            ],
            data: Some("2025-05-21T13:00:00Z".to_string()),
            hora: Some("10:00".to_string()),
            valor_total: None,
        })
        .unwrap();

        assert_eq!(params.valor_total, 80.0);
        assert_eq!(params.data, "2025-05-21");
        assert_eq!(params.status, AppointmentStatus::Pendente);
    }

    #[test]
    fn create_requires_client_date_and_time() {
        let result = CreateAppointmentParams::from_dto(CreateAppointmentDto {
            client_id: Some("1".to_string()),
            data: Some("2025-05-21".to_string()),
            ..Default::default()
        });

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn patch_recomputes_total_when_procedures_change() {
        let patch = AppointmentPatch::from_dto(UpdateAppointmentDto {
            procedimentos: Some(vec![ProcedureSnapshotDto {
                id: "2".to_string(),
                nome: "Escova".to_string(),
                valor: 40.0,
            }]),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(patch.valor_total, Some(40.0));
        assert_eq!(patch.client_id, None);
    }

    #[test]
    fn update_payload_rejects_status() {
        let result = serde_json::from_value::<UpdateAppointmentDto>(json!({
            "hora": "11:00",
            "status": "confirmado"
        }));

        assert!(result.is_err());
    }
}
