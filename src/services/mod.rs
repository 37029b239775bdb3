use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod main;
pub mod vehicles;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input rejected before reaching the repository. Messages are ordered.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Validation(err.messages())
    }
}
