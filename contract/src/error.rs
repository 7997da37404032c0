//! # Contract Errors

use credibil_schema::Failures;
use thiserror::Error;

/// Errors returned when reading a message from its JSON text.
#[derive(Error, Debug)]
pub enum Error {
    /// The text is not well-formed JSON.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON does not conform to the message's contract.
    #[error("invalid message: {0}")]
    Invalid(#[from] Failures),
}

impl Error {
    /// The validation failures, when the message was well-formed JSON.
    #[must_use]
    pub const fn failures(&self) -> Option<&Failures> {
        match self {
            Self::Invalid(failures) => Some(failures),
            Self::Json(_) => None,
        }
    }
}
