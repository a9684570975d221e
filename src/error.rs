//! Error types for Slack API calls

use thiserror::Error;

/// Broad classification of a [`SlackError`], for callers that branch on the
/// failure class rather than the exact variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced a readable response.
    Transport,
    /// The response body was not the JSON shape we expected.
    Decode,
    /// Slack answered with `"ok": false`.
    Api,
    /// The client was configured with unusable values.
    Config,
}

/// Errors returned by [`SlackClient`](crate::SlackClient) operations.
#[derive(Debug, Error)]
pub enum SlackError {
    /// Connection, timeout or body read failure.
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx HTTP status without a Slack envelope in the body.
    #[error("HTTP {status} from {endpoint}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The body was not valid JSON or did not match the result type.
    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Slack reported failure; `code` is its `error` string verbatim.
    #[error("{code}")]
    Api { code: String },

    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl SlackError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SlackError::Transport { .. } | SlackError::Status { .. } => ErrorKind::Transport,
            SlackError::Decode { .. } => ErrorKind::Decode,
            SlackError::Api { .. } => ErrorKind::Api,
            SlackError::Config(_) => ErrorKind::Config,
        }
    }

    /// True for failures where nothing was learned from Slack itself, so
    /// retrying the same request may succeed.
    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    /// The Slack error code, when Slack reported one.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            SlackError::Api { code } => Some(code),
            _ => None,
        }
    }
}
