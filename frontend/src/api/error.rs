use leptos::*;
use thiserror::Error;

/// Failure of a single facade call.
///
/// Every variant is produced by the transport and handed to the caller as-is;
/// the facade never rewrites or recovers from an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, CORS).
    #[error("Request failed: {0}")]
    Network(String),

    /// The server answered with a non-success HTTP status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The server answered 2xx but the envelope reported a failure.
    #[error("{message}")]
    Rejected { code: i32, message: String },

    /// Caller parameters could not be serialized into the request.
    #[error("Failed to encode request: {0}")]
    Encode(String),

    /// The body (or its `data` member) did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The session token could not be persisted.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApiError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.to_string()
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.to_string().into_view()
    }
}
