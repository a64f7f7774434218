//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Aging an inventory never fails; these errors only surface at the
/// configuration boundary (building or decoding rule sets).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed or inconsistent input).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_renders_message() {
        let err = DomainError::validation("min_quality must not exceed max_quality");
        assert_eq!(
            err.to_string(),
            "validation failed: min_quality must not exceed max_quality"
        );
    }
}
