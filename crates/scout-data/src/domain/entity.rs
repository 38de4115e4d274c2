//! Domain Layer - Core Entity Trait
//!
//! Every record carries an opaque identifier and nothing else identifies it.

use thiserror::Error;

/// Core trait for all domain records
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the record's identifier
    type Id: Clone + Eq + std::hash::Hash + Send + Sync;

    /// Returns the record's identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for data operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Data-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(DomainError::NotFound("7".to_string()).to_string(), "Not found: 7");
        assert_eq!(
            DomainError::Conflict("already saved".to_string()).to_string(),
            "Conflict: already saved"
        );
    }
}
