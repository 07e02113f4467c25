use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListError {
    #[error("Load failure: {0}")]
    LoadFailure(String),

    #[error("Validation failed for '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Record '{0}' not found")]
    NotFound(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

pub type Result<T> = std::result::Result<T, ListError>;

impl ListError {
    /// Build a blocking validation error for one field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ListError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for ListError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}
