//! Error types for the mock API boundary.

use crate::timer::Cancelled;
use thiserror::Error;

/// Failures a real data source could surface.
///
/// The bundled mock client only ever produces [`ApiError::Cancelled`] (and
/// that only when the caller cancels); `Timeout` and `Unavailable` exist so
/// callers are written against the contract a real collaborator would have.
/// A failed fetch carries no partial data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request exceeded its deadline.
    #[error("request timed out after {waited_ms}ms")]
    Timeout {
        /// How long the caller waited before giving up.
        waited_ms: u64,
    },

    /// The backing service could not be reached.
    #[error("service unavailable: {reason}")]
    Unavailable {
        /// Collaborator-supplied detail.
        reason: String,
    },

    /// The in-flight request was cancelled by the caller.
    #[error("request cancelled")]
    Cancelled,
}

impl From<Cancelled> for ApiError {
    fn from(_: Cancelled) -> Self {
        Self::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display() {
        let err = ApiError::Timeout { waited_ms: 500 };
        assert_eq!(err.to_string(), "request timed out after 500ms");
    }

    #[test]
    fn test_unavailable_display() {
        let err = ApiError::Unavailable {
            reason: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_cancelled_from_timer() {
        let err = ApiError::from(Cancelled);
        assert_eq!(err, ApiError::Cancelled);
    }
}
