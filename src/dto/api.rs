//! DTOs exposed by the JSON API endpoints.

use serde::{Deserialize, Serialize};

/// `message` is a list for validation failures and a single string otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

/// Error body shared by every API failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: ErrorMessage,
    pub error: String,
}

impl ErrorResponse {
    pub fn bad_request(messages: Vec<String>) -> Self {
        Self {
            status_code: 400,
            message: ErrorMessage::Many(messages),
            error: "Bad Request".to_string(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status_code: 404,
            message: ErrorMessage::One(message.into()),
            error: "Not Found".to_string(),
        }
    }

    pub fn internal() -> Self {
        Self {
            status_code: 500,
            message: ErrorMessage::One("Internal server error".to_string()),
            error: "Internal Server Error".to_string(),
        }
    }
}
