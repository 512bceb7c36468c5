//! Error types for the review clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the status API or the bot API
///
/// None of the variants carry the API token; they identify the request by
/// its `from_date` parameter and endpoint instead.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The status API could not be reached at all
    #[error("connection error: {source}. from_date={from_date}, endpoint={endpoint}")]
    Connectivity {
        source: reqwest::Error,
        from_date: i64,
        endpoint: String,
    },

    /// The status API answered with something other than 200
    #[error(
        "API did not return the expected result, got status {status}. from_date={from_date}, endpoint={endpoint}"
    )]
    Upstream {
        /// HTTP status code
        status: u16,
        from_date: i64,
        endpoint: String,
    },

    /// The status API answered 200 but reported a failure in the body
    #[error(
        "API responded with error field \"{key}\": {value}. from_date={from_date}, endpoint={endpoint}"
    )]
    Response {
        /// Name of the error field (`error` or `code`)
        key: &'static str,
        /// Value of the error field
        value: String,
        from_date: i64,
        endpoint: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// HTTP request to the bot API failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    /// The bot API refused to deliver the message
    #[error("Message rejected (status {status}): {description}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Description returned by the bot API
        description: String,
    },
}

impl ClientError {
    /// Check if this error is transient and likely to clear on the next poll
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Connectivity { .. } | Self::RequestFailed(_) => true,
            Self::Upstream { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
