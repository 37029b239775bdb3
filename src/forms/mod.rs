//! Form definitions backing the showcase routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod vehicles;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("malformed query string: {0}")]
    Malformed(String),
}

impl FormError {
    /// Human-readable violations in reporting order.
    pub fn messages(&self) -> Vec<String> {
        match self {
            FormError::Validation(errors) => vehicles::ordered_messages(errors),
            FormError::Malformed(_) => vec![self.to_string()],
        }
    }
}
