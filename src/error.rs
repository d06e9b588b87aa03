//! Error types shared by the API client and the review operations.

use thiserror::Error;

/// Failures talking to the marketplace API or the identity provider.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// `detail` from the error body, the raw body, or the status text.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("unexpected response from server: {0}")]
    Decode(String),

    /// No credential could be obtained for a mutating call.
    #[error("authentication required: {0}")]
    Auth(String),
}

/// Failures of the review panel operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewError {
    #[error("Review must be at least {min} characters.")]
    ContentTooShort { min: usize, actual: usize },

    #[error("Reply cannot be empty.")]
    EmptyReply,

    #[error("Unknown review id: {0}")]
    InvalidReviewId(String),

    #[error("No freelancer selected.")]
    MissingFreelancer,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ReviewError {
    /// Whether the failure was caught before any request went out.
    pub fn is_local(&self) -> bool {
        !matches!(self, ReviewError::Api(_))
    }
}
