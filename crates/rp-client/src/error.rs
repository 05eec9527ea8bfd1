//! Client error types

use rp_core::RecipePageError;
use thiserror::Error;

/// Errors raised while talking to the site
#[derive(Error, Debug)]
pub enum ClientError {
    /// Base URL or endpoint could not be parsed
    #[error("Invalid URL '{url}': {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("Unexpected response ({status}): {reason}")]
    InvalidReply { status: u16, reason: String },

    /// Non-success status without a usable body
    #[error("Server returned HTTP {0}")]
    Status(u16),
}

/// Result alias for client operations
pub type ClientResult<T> = std::result::Result<T, ClientError>;

impl From<ClientError> for RecipePageError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Url { url, source } => RecipePageError::InvalidEndpoint {
                url,
                reason: source.to_string(),
            },
            other => RecipePageError::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion() {
        let err: RecipePageError = ClientError::Status(502).into();
        assert!(matches!(err, RecipePageError::Transport(msg) if msg.contains("502")));

        let source = url::Url::parse("not a url").unwrap_err();
        let err: RecipePageError = ClientError::Url {
            url: "not a url".to_string(),
            source,
        }
        .into();
        assert!(matches!(err, RecipePageError::InvalidEndpoint { .. }));
    }
}
