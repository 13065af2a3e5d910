//! Error types for the box model.

use thiserror::Error;

/// Errors raised by box construction and face queries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoxError {
    /// A face-direction label outside `left, right, up, down, front, rear`.
    #[error("unknown face direction: {0:?}")]
    InvalidDirection(String),

    /// Coordinate input with the wrong arity or a non-finite component.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A cell document could not be deserialized.
    #[error("parse error: {0}")]
    Parse(String),

    /// A cell document could not be serialized.
    #[error("serialize error: {0}")]
    Serialize(String),
}

/// Result type for box operations.
pub type Result<T> = std::result::Result<T, BoxError>;
