//! Request and response data of the `web` module: the deserializable signup
//! payload, its validated counterpart and the JSON envelope every API
//! response is wrapped in.

use serde::{Deserialize, Serialize};

// ###################################
// ->   STRUCTS
// ###################################
/// Deserializable signup request.
/// `contact` may be absent or null; validation treats both like an empty
/// string.
#[derive(Debug, Deserialize)]
pub struct DeserSignup {
    #[serde(default)]
    pub contact: Option<String>,
}

/// Validated contact info: trimmed and non-empty. Free-form beyond that,
/// an email address or a phone number, no format validation.
#[derive(Debug, Clone)]
pub struct ValidContact(String);

impl ValidContact {
    pub fn parse<S>(value: S) -> Result<Self, DataParsingError>
    where
        S: AsRef<str>,
    {
        let value = value.as_ref().trim();

        if value.is_empty() {
            return Err(DataParsingError::ContactEmpty);
        }

        Ok(ValidContact(value.to_owned()))
    }
}

impl AsRef<str> for ValidContact {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<DeserSignup> for ValidContact {
    type Error = DataParsingError;

    fn try_from(deser_signup: DeserSignup) -> Result<Self, Self::Error> {
        ValidContact::parse(deser_signup.contact.unwrap_or_default())
    }
}

/// The envelope of every API response: a boolean success flag, an optional
/// human-readable message and the optional payload.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        ApiResponse {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn data_with_message(data: T, message: impl Into<String>) -> Self {
        ApiResponse {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum DataParsingError {
    #[error("Email or phone number is required")]
    ContactEmpty,
}
