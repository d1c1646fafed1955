use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::lenient;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClientDto {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateClientDto {
    #[serde(default, deserialize_with = "lenient::option_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::option_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::option_text")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateClientDto {
    #[serde(default, deserialize_with = "lenient::option_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::option_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::option_text")]
    pub email: Option<String>,
}

/// Minimal client entry used to populate selection lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClientOptionDto {
    pub id: String,
    pub name: String,
}
