use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::lenient;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProcedureDto {
    pub id: String,
    pub nome: String,
    pub preco: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateProcedureDto {
    #[serde(default, alias = "name", deserialize_with = "lenient::option_text")]
    pub nome: Option<String>,
    #[serde(default, alias = "price", deserialize_with = "lenient::option_number")]
    pub preco: Option<f64>,
}
