//! Financial transaction domain model.
//!
//! Transactions are either entered manually or generated when an appointment is
//! confirmed. Generated ones carry `origem = agendamento` and the appointment id in
//! `origemId`; at most one revenue transaction exists per appointment.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    model::{
        lenient,
        transaction::{CreateTransactionDto, TransactionDto, UpdateTransactionDto},
    },
    server::{
        error::AppError,
        model::appointment::Appointment,
        util::{parse::non_blank, period},
    },
};

/// Description used when the confirmed appointment's client no longer exists.
pub const REMOVED_CLIENT: &str = "Cliente Removido";
/// Name used for a procedure snapshot without a name.
pub const UNNAMED_PROCEDURE: &str = "Procedimento";
pub const DEFAULT_CATEGORY: &str = "Outros";
pub const APPOINTMENT_CATEGORY: &str = "Agendamento";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Receita,
    Despesa,
}

impl TransactionKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "receita" => Some(Self::Receita),
            "despesa" => Some(Self::Despesa),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Receita => "receita",
            Self::Despesa => "despesa",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionOrigin {
    #[default]
    Manual,
    Agendamento,
}

impl TransactionOrigin {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "manual" => Some(Self::Manual),
            "agendamento" => Some(Self::Agendamento),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Agendamento => "agendamento",
        }
    }
}

fn category<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::option_text(deserializer)?.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()))
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    pub tipo: TransactionKind,
    #[serde(default, deserialize_with = "lenient::text")]
    pub descricao: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub valor: f64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub data: String,
    #[serde(default)]
    pub origem: TransactionOrigin,
    #[serde(rename = "origemId", default, deserialize_with = "lenient::option_text")]
    pub origem_id: Option<String>,
    #[serde(default = "default_category", deserialize_with = "category")]
    pub categoria: String,
}

impl Transaction {
    /// Whether this is the revenue transaction generated for `appointment_id`.
    pub fn is_revenue_for(&self, appointment_id: &str) -> bool {
        self.tipo == TransactionKind::Receita
            && self.origem == TransactionOrigin::Agendamento
            && self.origem_id.as_deref() == Some(appointment_id)
    }

    pub fn into_dto(self) -> TransactionDto {
        TransactionDto {
            id: self.id,
            tipo: self.tipo.as_str().to_string(),
            descricao: self.descricao,
            valor: self.valor,
            data: self.data,
            origem: self.origem.as_str().to_string(),
            origem_id: self.origem_id,
            categoria: self.categoria,
        }
    }
}

/// Validated input for a new transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTransactionParams {
    pub tipo: TransactionKind,
    pub descricao: String,
    pub valor: f64,
    pub data: String,
    pub origem: TransactionOrigin,
    #[serde(rename = "origemId")]
    pub origem_id: Option<String>,
    pub categoria: String,
}

fn parse_kind(value: &str) -> Result<TransactionKind, AppError> {
    TransactionKind::parse(value).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Invalid transaction type '{}'; use \"receita\" or \"despesa\"",
            value
        ))
    })
}

fn validated_amount(valor: f64) -> Result<f64, AppError> {
    if valor < 0.0 {
        return Err(AppError::BadRequest(
            "Transaction amount cannot be negative".to_string(),
        ));
    }
    Ok(valor)
}

fn validated_date(value: String) -> Result<String, AppError> {
    period::parse_date(&value)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .ok_or_else(|| AppError::BadRequest(format!("Invalid transaction date '{}'", value)))
}

impl CreateTransactionParams {
    /// Validates a manual transaction.
    ///
    /// `tipo` and `valor` are required. The origin defaults to `manual`, the category to
    /// `Outros` and the date to `today`.
    pub fn from_dto(dto: CreateTransactionDto, today: NaiveDate) -> Result<Self, AppError> {
        let tipo = non_blank(dto.tipo)
            .ok_or_else(|| AppError::BadRequest("Transaction type is required".to_string()))?;
        let tipo = parse_kind(&tipo)?;
        let valor = dto
            .valor
            .ok_or_else(|| AppError::BadRequest("Transaction amount is required".to_string()))?;

        let origem = match non_blank(dto.origem) {
            Some(origem) => TransactionOrigin::parse(&origem).ok_or_else(|| {
                AppError::BadRequest(format!("Invalid transaction origin '{}'", origem))
            })?,
            None => TransactionOrigin::Manual,
        };

        let origem_id = match origem {
            TransactionOrigin::Manual => None,
            TransactionOrigin::Agendamento => Some(non_blank(dto.origem_id).ok_or_else(|| {
                AppError::BadRequest("origemId is required for appointment transactions".to_string())
            })?),
        };

        let data = match non_blank(dto.data) {
            Some(data) => validated_date(data)?,
            None => today.format("%Y-%m-%d").to_string(),
        };

        Ok(Self {
            tipo,
            descricao: non_blank(dto.descricao).unwrap_or_default(),
            valor: validated_amount(valor)?,
            data,
            origem,
            origem_id,
            categoria: non_blank(dto.categoria).unwrap_or_else(default_category),
        })
    }

    /// Builds the revenue transaction recorded when `appointment` is confirmed.
    ///
    /// The description reads `Agendamento - {client}` followed by the procedure names in
    /// parentheses when there are any. A missing client renders as `Cliente Removido`.
    pub fn revenue_for(appointment: &Appointment, client_name: Option<&str>) -> Self {
        let client_name = client_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(REMOVED_CLIENT);

        let mut descricao = format!("Agendamento - {}", client_name);
        if !appointment.procedimentos.is_empty() {
            let names: Vec<&str> = appointment
                .procedimentos
                .iter()
                .map(|p| {
                    if p.nome.trim().is_empty() {
                        UNNAMED_PROCEDURE
                    } else {
                        p.nome.as_str()
                    }
                })
                .collect();
            descricao.push_str(&format!(" ({})", names.join(", ")));
        }

        Self {
            tipo: TransactionKind::Receita,
            descricao,
            valor: appointment.valor_total,
            data: period::normalize_date(&appointment.data),
            origem: TransactionOrigin::Agendamento,
            origem_id: Some(appointment.id.clone()),
            categoria: APPOINTMENT_CATEGORY.to_string(),
        }
    }
}

/// Fields to change on an existing transaction. The origin reference is fixed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransactionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<TransactionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
}

impl TransactionPatch {
    pub fn from_dto(dto: UpdateTransactionDto) -> Result<Self, AppError> {
        Ok(Self {
            tipo: dto.tipo.as_deref().map(parse_kind).transpose()?,
            descricao: dto.descricao.map(|d| d.trim().to_string()),
            valor: dto.valor.map(validated_amount).transpose()?,
            data: dto.data.map(validated_date).transpose()?,
            categoria: non_blank(dto.categoria),
        })
    }
}
