//! Error types for the remote access layer.
//!
//! Every failure the service or the transport can produce collapses into
//! one variant per operation, carrying a human-readable reason.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by [`PlaylistApi`](super::PlaylistApi) implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// Listing playlists failed (non-2xx, unreachable, or undecodable body).
    #[error("Failed to fetch playlists: {reason}")]
    Fetch { reason: String },

    /// Recording a like failed.
    #[error("Failed to like playlist: {reason}")]
    Like { reason: String },

    /// The health probe failed.
    #[error("Health check failed: {reason}")]
    Health { reason: String },
}

impl RemoteError {
    /// Message shown to the user.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The reason without the operation prefix.
    pub fn reason(&self) -> &str {
        match self {
            RemoteError::Fetch { reason }
            | RemoteError::Like { reason }
            | RemoteError::Health { reason } => reason,
        }
    }

    /// Stable label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RemoteError::Fetch { .. } => "remote_fetch_error",
            RemoteError::Like { .. } => "remote_like_error",
            RemoteError::Health { .. } => "remote_health_error",
        }
    }
}

/// Which operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operation {
    Fetch,
    Like,
    Health,
}

impl Operation {
    pub(crate) fn error(self, reason: impl Into<String>) -> RemoteError {
        let reason = reason.into();
        match self {
            Operation::Fetch => RemoteError::Fetch { reason },
            Operation::Like => RemoteError::Like { reason },
            Operation::Health => RemoteError::Health { reason },
        }
    }

    /// Non-success status: the canonical reason phrase, or the bare code
    /// when the status has none.
    pub(crate) fn status(self, status: StatusCode) -> RemoteError {
        let reason = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string());
        self.error(reason)
    }
}
