use thiserror::Error;

/// Errors raised by the pricing and numbering engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("validation failed on {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("validation failed on line {line}, field {field}: {message}")]
    LineValidation {
        line: usize,
        field: &'static str,
        message: String,
    },

    #[error("number generation failed: {0}")]
    NumberGeneration(anyhow::Error),

    #[error("database error: {0}")]
    Database(anyhow::Error),

    #[error("configuration error: {0}")]
    Config(anyhow::Error),
}

impl EngineError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        EngineError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Field name of a validation failure, if this is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            EngineError::Validation { field, .. } => Some(field),
            EngineError::LineValidation { field, .. } => Some(field),
            _ => None,
        }
    }
}
