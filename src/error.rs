//! Error types for a3s-cron-text

use thiserror::Error;

use crate::field::FieldKind;

/// Errors that can occur while validating, parsing, or rendering expressions
#[derive(Debug, Error)]
pub enum CronError {
    /// Wrong number of whitespace-separated fields
    #[error("Expected {expected} fields, got {actual}")]
    FieldCount { expected: usize, actual: usize },

    /// A token does not match the grammar or bounds of its field
    #[error("Invalid {field} field: {message}")]
    Field { field: FieldKind, message: String },

    /// `@`-prefixed token that is not a known special keyword
    #[error("Unknown special keyword: {0}")]
    UnknownKeyword(String),

    /// Expression-level failure not attributable to one field
    #[error("Invalid cron expression: {0}")]
    InvalidExpression(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl CronError {
    pub(crate) fn for_field(field: FieldKind, message: impl Into<String>) -> Self {
        Self::Field {
            field,
            message: message.into(),
        }
    }

    /// The field this error is attributed to, if any
    pub fn field(&self) -> Option<FieldKind> {
        match self {
            Self::Field { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Result type alias for cron-text operations
pub type Result<T> = std::result::Result<T, CronError>;
