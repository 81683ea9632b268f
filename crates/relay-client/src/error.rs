//! Error types for the submission client.

/// Submission errors.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Endpoint unreachable, request timed out, or the response body could
    /// not be read.
    #[error("network error: {message}")]
    Network { message: String },

    /// The service answered with a non-success status.
    #[error("submission rejected: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    /// No token configured while the deployment requires one. Raised before
    /// any request is made.
    #[error("no auth token configured")]
    Unauthenticated,

    /// Client could not be built or the base URL is invalid.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// The bundle could not be encoded into the wire format.
    #[error("encode error: {message}")]
    Encode { message: String },
}

impl SubmitError {
    /// Whether retrying the whole submit call could help. Retrying is the
    /// caller's decision; the client never retries on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out: {}", err)
        } else {
            err.to_string()
        };
        Self::Network { message }
    }
}

/// Result type for submission operations.
pub type SubmitResult<T> = Result<T, SubmitError>;
