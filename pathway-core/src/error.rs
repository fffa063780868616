//! Error taxonomy for the Pathway client.
//!
//! Every failed interaction with the recommendation service is classified
//! into exactly one [`ApiError`] variant, in a fixed priority order:
//! transport failures first, then status-code failures, then body failures.
//! `Validation` is the one local kind and never reaches the network.

use thiserror::Error;

/// Classified failures from the assessment pipeline.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, connection refused, timeout.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with markup instead of a structured API error,
    /// typically a proxy or gateway error page.
    #[error("service unavailable: received an error page instead of an API response")]
    ServiceUnavailable,

    /// Non-success status without a structured error body.
    #[error("server error: {status} {status_text}")]
    Server {
        /// Numeric HTTP status.
        status: u16,
        /// Canonical status text, e.g. "Internal Server Error".
        status_text: String,
    },

    /// Business error reported by the service; the payload is its `detail`
    /// field verbatim.
    #[error("{0}")]
    Application(String),

    /// Success status but the body violated the contract.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Local precondition failure; never reaches the network.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// The fixed user-facing message for this error kind.
    ///
    /// `Application` and `Validation` surface their payload verbatim; the
    /// other kinds map to a stable template.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Unable to connect to the server. Please check your internet connection \
                 and ensure the backend is accessible."
                    .to_string()
            }
            ApiError::ServiceUnavailable => {
                "Backend server is not responding properly. Please check your internet \
                 connection and ensure the backend is accessible."
                    .to_string()
            }
            ApiError::Server {
                status,
                status_text,
            } => format!("Server error: {status} {status_text}"),
            ApiError::Application(detail) => detail.clone(),
            ApiError::Protocol(_) => {
                "The server returned an unexpected response. Please try again.".to_string()
            }
            ApiError::Validation(message) => message.clone(),
        }
    }
}
