//! Client domain model and parameters.

use serde::{Deserialize, Serialize};

use crate::{
    model::{
        client::{ClientDto, ClientOptionDto, CreateClientDto, UpdateClientDto},
        lenient,
    },
    server::{
        error::AppError,
        util::parse::{digits_only, non_blank},
    },
};

/// A salon client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    /// Digits-only phone number, unique among clients.
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option_text"
    )]
    pub email: Option<String>,
}

impl Client {
    pub fn into_dto(self) -> ClientDto {
        ClientDto {
            id: self.id,
            name: self.name,
            phone: self.phone,
            email: self.email,
        }
    }

    pub fn into_option_dto(self) -> ClientOptionDto {
        ClientOptionDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Validated input for registering a client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateClientParams {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl CreateClientParams {
    /// Validates a creation request.
    ///
    /// The phone number is normalised to digits only before it is checked.
    ///
    /// # Returns
    /// - `Ok(CreateClientParams)` - Name and phone present
    /// - `Err(AppError::BadRequest)` - Missing name or phone
    pub fn from_dto(dto: CreateClientDto) -> Result<Self, AppError> {
        let name = non_blank(dto.name)
            .ok_or_else(|| AppError::BadRequest("Client name is required".to_string()))?;
        let phone = dto
            .phone
            .map(|p| digits_only(&p))
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::BadRequest("Client phone is required".to_string()))?;

        Ok(Self {
            name,
            phone,
            email: non_blank(dto.email),
        })
    }
}

/// Fields to change on an existing client. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClientPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ClientPatch {
    /// Validates an update request, rejecting blank names and phones without digits.
    pub fn from_dto(dto: UpdateClientDto) -> Result<Self, AppError> {
        let name = match dto.name {
            Some(name) => Some(
                non_blank(Some(name))
                    .ok_or_else(|| AppError::BadRequest("Client name cannot be empty".to_string()))?,
            ),
            None => None,
        };

        let phone = match dto.phone {
            Some(phone) => {
                let digits = digits_only(&phone);
                if digits.is_empty() {
                    return Err(AppError::BadRequest(
                        "Client phone cannot be empty".to_string(),
                    ));
                }
                Some(digits)
            }
            None => None,
        };

        Ok(Self {
            name,
            phone,
            email: dto.email.map(|e| e.trim().to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalises_phone_on_create() {
        let params = CreateClientParams::from_dto(CreateClientDto {
            name: Some(" Ana ".to_string()),
            phone: Some("(11) 99999-8888".to_string()),
            email: Some("".to_string()),
        })
        .unwrap();

        assert_eq!(params.name, "Ana");
        assert_eq!(params.phone, "11999998888");
        assert_eq!(params.email, None);
    }

    #[test]
    fn requires_name_and_phone() {
        let missing_name = CreateClientParams::from_dto(CreateClientDto {
            name: None,
            phone: Some("11999998888".to_string()),
            email: None,
        });
        let missing_phone = CreateClientParams::from_dto(CreateClientDto {
            name: Some("Ana".to_string()),
            phone: Some("---".to_string()),
            email: None,
        });

        assert!(matches!(missing_name, Err(AppError::BadRequest(_))));
        assert!(matches!(missing_phone, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn patch_serializes_only_given_fields() {
        let patch = ClientPatch::from_dto(UpdateClientDto {
            name: None,
            phone: Some("11 3333-4444".to_string()),
            email: None,
        })
        .unwrap();

        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, serde_json::json!({ "phone": "1133334444" }));
    }
}
