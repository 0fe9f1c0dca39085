use std::error::Error as _;

use thiserror::Error;

/// Errors a single lookup can end with.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request never produced an HTTP response (connect, TLS, timeout).
    #[error("{}", describe_transport(.source))]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success status.
    #[error("{reason}")]
    Status { code: u16, reason: String },

    /// The provider answered 2xx but flagged the lookup as failed.
    #[error("{message}")]
    Api { message: String },

    /// The body was not the JSON the provider is expected to send.
    #[error("Invalid response from movie service: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// The configured endpoint cannot carry query parameters.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl LookupError {
    /// Build a transport error, stripping the request URL so the API key
    /// never reaches the screen or the log.
    pub fn transport(source: reqwest::Error) -> Self {
        LookupError::Transport {
            source: source.without_url(),
        }
    }

    /// Text stored in the search view and shown to the user.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Short machine-readable classification, used in log records.
    pub fn error_type(&self) -> &'static str {
        match self {
            LookupError::Transport { .. } => "transport",
            LookupError::Status { .. } => "http_status",
            LookupError::Api { .. } => "api",
            LookupError::Decode { .. } => "decode",
            LookupError::InvalidUrl { .. } => "invalid_url",
        }
    }
}

fn describe_transport(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        return "Request timed out".to_string();
    }

    let mut message = err.to_string();
    let mut cause = err.source();
    let mut root = None;
    while let Some(inner) = cause {
        root = Some(inner);
        cause = inner.source();
    }
    if let Some(root) = root {
        message.push_str(": ");
        message.push_str(&root.to_string());
    }
    message
}
