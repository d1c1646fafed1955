use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::lenient;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    #[serde(default, deserialize_with = "lenient::option_text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient::option_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::option_text")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    #[serde(default, deserialize_with = "lenient::option_text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient::option_text")]
    pub password: Option<String>,
}
