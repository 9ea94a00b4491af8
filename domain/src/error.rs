use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    pub fn empty_value() -> Self {
        DomainError::InvalidArgument("Value cannot be null or empty!".to_string())
    }

    pub fn unknown_value(value: &str) -> Self {
        DomainError::InvalidArgument(format!("Cannot create enum from {value} value!"))
    }
}
