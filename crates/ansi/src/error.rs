//! Error types for attribute lookup.

use thiserror::Error;

/// Errors that can occur when resolving an attribute name.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnsiError {
    /// The name is not one of the supported colors or text attributes.
    #[error("invalid attribute: {0}")]
    InvalidAttribute(String),

    /// A text attribute exists but has no entry in the disable table.
    #[error("missing disable code for text attribute: {0}")]
    MissingDisableCode(String),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, AnsiError>;
