//! Domain errors for sequence aggregation.

use thiserror::Error;

/// Errors raised by aggregate operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    /// The operation has no identity element and was given no input.
    #[error("invalid argument: {operation} is undefined for an empty sequence")]
    EmptySequence { operation: &'static str },
}

pub type Result<T> = std::result::Result<T, AggregateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_message() {
        let err = AggregateError::EmptySequence { operation: "max" };
        assert_eq!(
            err.to_string(),
            "invalid argument: max is undefined for an empty sequence"
        );
    }
}
