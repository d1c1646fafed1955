//! User account model.

use serde::{Deserialize, Serialize};

use crate::{
    model::{
        lenient,
        user::{LoginDto, RegisterDto, UserDto},
    },
    server::{error::AppError, util::parse::non_blank},
};

/// Registered account. `password` holds the salted hash, never the plaintext.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub username: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(rename = "password", default, deserialize_with = "lenient::text")]
    pub password_hash: String,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
        }
    }
}

/// Stored shape of a new account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    #[serde(rename = "password")]
    pub password_hash: String,
}

/// Validated registration request. The password is still plaintext here.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterParams {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        let (Some(username), Some(email), Some(password)) = (
            non_blank(dto.username),
            non_blank(dto.email),
            dto.password.filter(|p| !p.is_empty()),
        ) else {
            return Err(AppError::BadRequest(
                "Username, email and password are required".to_string(),
            ));
        };

        Ok(Self {
            username,
            email,
            password,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

impl LoginParams {
    /// Missing fields are treated as empty strings and simply fail authentication.
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            username: dto.username.unwrap_or_default().trim().to_string(),
            password: dto.password.unwrap_or_default(),
        }
    }
}
