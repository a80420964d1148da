use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Boxed source error for transport and storage failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error payload shape used by the backend for non-success responses.
/// This is an external contract: `detail` may be absent or the body may not
/// be JSON at all, and neither may mask the status-derived failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was obtained: connection refused, DNS failure, timeout.
    #[error("network error: {0}")]
    Transport(#[source] BoxError),

    /// The server answered with a non-success status. `message` is the
    /// server-supplied `detail` when present, else a generic `HTTP <status>`.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// The response carried a success status but its body did not match the
    /// expected shape.
    #[error("invalid response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The request could not be built: body serialization failed or the
    /// stored token is not a valid header value.
    #[error("failed to build request: {0}")]
    Request(#[source] BoxError),

    /// The credential store rejected a write during login.
    #[error("credential store error: {0}")]
    Store(#[source] BoxError),
}

impl ApiError {
    /// HTTP status of an application-level failure. `None` for transport,
    /// decode, and storage failures, which never carried a server status -
    /// this is how callers tell connectivity problems from server rejections.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build the failure for a non-success response, preferring the server's
    /// human-readable `detail` message. An unparsable or detail-less body
    /// falls back to the generic status message.
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        ApiError::Api { status, message }
    }
}
