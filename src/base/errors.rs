use thiserror::Error;

/// Errors raised by the analysis pipeline
///
/// Numeric degeneracies (e.g., zero net cone resistance) are **not** errors;
/// they are normalized to zero by the computations themselves.
#[derive(Debug, Error)]
pub enum CptError {
    /// Invalid input data or configuration (reported once, never retried)
    #[error("invalid input: {0}")]
    InputValidation(&'static str),

    /// File could not be opened, created or written
    #[error("file access failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON content could not be parsed or generated
    #[error("JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CptError {
    /// Returns the message of an input validation error, if this is one
    pub fn validation_message(&self) -> Option<&'static str> {
        match self {
            CptError::InputValidation(msg) => Some(msg),
            _ => None,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
