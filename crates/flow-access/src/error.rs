//! Error types for Access API operations.

/// Errors that can occur when talking to the Flow Access API.
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failed to serialize or deserialize data.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Server returned a non-2xx response.
    #[error("server error ({status_code}): {message}")]
    ServerError {
        /// HTTP status code.
        status_code: u16,
        /// Error message from server.
        message: String,
    },

    /// Resource not found (404).
    #[error("not found")]
    NotFound,

    /// The server returned an empty collection where one item was expected.
    #[error("empty response from server")]
    EmptyResponse,

    /// A numeric field in a response could not be parsed.
    #[error("invalid numeric field {field}: {value:?}")]
    InvalidNumericField {
        /// Name of the offending field.
        field: &'static str,
        /// The raw value received.
        value: String,
    },

    /// A transaction is not in a submittable state.
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),
}
