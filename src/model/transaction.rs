use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::lenient;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransactionDto {
    pub id: String,
    pub tipo: String,
    pub descricao: String,
    pub valor: f64,
    pub data: String,
    pub origem: String,
    #[serde(rename = "origemId")]
    pub origem_id: Option<String>,
    pub categoria: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateTransactionDto {
    #[serde(default, deserialize_with = "lenient::option_text")]
    pub tipo: Option<String>,
    #[serde(default, deserialize_with = "lenient::option_text")]
    pub descricao: Option<String>,
    #[serde(default, deserialize_with = "lenient::option_number")]
    pub valor: Option<f64>,
    #[serde(default, deserialize_with = "lenient::option_text")]
    pub data: Option<String>,
    #[serde(default, deserialize_with = "lenient::option_text")]
    pub origem: Option<String>,
    #[serde(
        default,
        rename = "origemId",
        deserialize_with = "lenient::option_text"
    )]
    pub origem_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::option_text")]
    pub categoria: Option<String>,
}

/// Partial transaction update. The origin reference cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateTransactionDto {
    #[serde(default, deserialize_with = "lenient::option_text")]
    pub tipo: Option<String>,
    #[serde(default, deserialize_with = "lenient::option_text")]
    pub descricao: Option<String>,
    #[serde(default, deserialize_with = "lenient::option_number")]
    pub valor: Option<f64>,
    #[serde(default, deserialize_with = "lenient::option_text")]
    pub data: Option<String>,
    #[serde(default, deserialize_with = "lenient::option_text")]
    pub categoria: Option<String>,
}
