//! Procedure (priced service) domain model.

use serde::{Deserialize, Serialize};

use crate::{
    model::{
        lenient,
        procedure::{CreateProcedureDto, ProcedureDto},
    },
    server::{error::AppError, util::parse::non_blank},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Procedure {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub nome: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub preco: f64,
}

impl Procedure {
    pub fn into_dto(self) -> ProcedureDto {
        ProcedureDto {
            id: self.id,
            nome: self.nome,
            preco: self.preco,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateProcedureParams {
    pub nome: String,
    pub preco: f64,
}

impl CreateProcedureParams {
    /// Validates a creation request: the name is required and the price must not be negative.
    pub fn from_dto(dto: CreateProcedureDto) -> Result<Self, AppError> {
        let nome = non_blank(dto.nome)
            .ok_or_else(|| AppError::BadRequest("Procedure name is required".to_string()))?;
        let preco = dto.preco.unwrap_or(0.0);

        if preco < 0.0 {
            return Err(AppError::BadRequest(
                "Procedure price cannot be negative".to_string(),
            ));
        }

        Ok(Self { nome, preco })
    }
}
