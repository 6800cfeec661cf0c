use thiserror::Error;

#[derive(Debug, Error)]
pub enum HomeQuoteError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Unsupported loan term: {years} years is not an offered product")]
    UnsupportedTerm { years: u32 },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for HomeQuoteError {
    fn from(e: serde_json::Error) -> Self {
        HomeQuoteError::SerializationError(e.to_string())
    }
}
