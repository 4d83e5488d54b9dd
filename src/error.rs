//! Error types shared by every combinator in the crate.

use thiserror::Error;

use crate::functional::plucking::PathSegment;
use crate::models::value::ValueType;

/// Failures reported by the sequence combinators.
///
/// Positions carried by the variants are 1-based and always refer to the
/// sequence that was passed in, never to an intermediate result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SequenceError {
    #[error("type mismatch at position {position}: expected {expected}, found {found}")]
    TypeMismatch {
        position: usize,
        expected: ValueType,
        found: ValueType,
    },
    #[error("length mismatch: expected {expected} elements, found {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("path segment {segment} not found at depth {depth}")]
    PathNotFound { depth: usize, segment: PathSegment },
    #[error("position {position} is out of range for a sequence of length {len}")]
    IndexOutOfRange { position: usize, len: usize },
}

impl SequenceError {
    pub fn type_mismatch(position: usize, expected: ValueType, found: ValueType) -> Self {
        Self::TypeMismatch {
            position,
            expected,
            found,
        }
    }

    pub fn length_mismatch(expected: usize, found: usize) -> Self {
        Self::LengthMismatch { expected, found }
    }

    /// Short machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            SequenceError::TypeMismatch { .. } => "TYPE_MISMATCH",
            SequenceError::LengthMismatch { .. } => "LENGTH_MISMATCH",
            SequenceError::PathNotFound { .. } => "PATH_NOT_FOUND",
            SequenceError::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
        }
    }
}

/// Result alias used throughout the crate.
pub type SequenceResult<T> = Result<T, SequenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SequenceError::type_mismatch(3, ValueType::Double, ValueType::Character);
        assert_eq!(
            err.to_string(),
            "type mismatch at position 3: expected double, found character"
        );

        let err = SequenceError::length_mismatch(3, 2);
        assert_eq!(err.to_string(), "length mismatch: expected 3 elements, found 2");

        let err = SequenceError::PathNotFound {
            depth: 2,
            segment: PathSegment::Name("uppers".to_string()),
        };
        assert_eq!(err.to_string(), "path segment \"uppers\" not found at depth 2");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            SequenceError::IndexOutOfRange { position: 11, len: 10 }.code(),
            "INDEX_OUT_OF_RANGE"
        );
        assert_eq!(SequenceError::length_mismatch(1, 2).code(), "LENGTH_MISMATCH");
    }
}
