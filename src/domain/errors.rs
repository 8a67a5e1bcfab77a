use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Invalid digit: {0:?}")]
    InvalidDigit(char),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    #[error("Unknown action type: {0}")]
    UnknownAction(String),
    #[error("Invalid action: {0}")]
    InvalidAction(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
