use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Data source error: {0}")]
    DataSource(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        RepositoryError::DataSource(format!("I/O error: {err}"))
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::DataSource(format!("Malformed vehicle data: {err}"))
    }
}
