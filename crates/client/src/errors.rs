//! Error types for the API client.

use stockadvisor_currency::SymbolError;
use thiserror::Error;

/// Type alias for Result using the client error type.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors returned by [`StockApi`](crate::StockApi) calls.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The symbol failed validation before any request was made.
    #[error(transparent)]
    InvalidSymbol(#[from] SymbolError),

    /// A request parameter is out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The request could not be sent or the connection failed.
    #[error("Request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The API answered with a non-success status.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Both the advanced and the basic prediction failed.
    #[error("Prediction unavailable (advanced: {advanced}; basic: {basic})")]
    PredictionUnavailable {
        advanced: Box<ClientError>,
        basic: Box<ClientError>,
    },
}

impl ClientError {
    /// Whether the API reported that the symbol has no data.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }

    /// Whether the failure happened before reaching the API.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ClientError::InvalidSymbol(_) | ClientError::InvalidArgument(_)
        )
    }
}
