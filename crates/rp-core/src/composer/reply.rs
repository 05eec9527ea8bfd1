//! Server reply to a comment post

use super::endpoint::AddressingScheme;
use serde::{Deserialize, Serialize};

/// Message shown when the server gives no reason for a failure
pub const GENERIC_REJECTION: &str = "Your comment could not be posted.";

/// JSON body returned by the comment endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerReply {
    /// Whether the comment was accepted
    #[serde(default)]
    pub success: bool,
    /// Rendered comment (url-rewrite scheme)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Rendered comment (parent-field scheme)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_html: Option<String>,
    /// Failure reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// What a reply means for the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyVerdict {
    /// Comment accepted; markup to insert
    Accepted(String),
    /// Comment not accepted; message for the user
    Rejected(String),
}

impl ServerReply {
    /// Successful reply carrying `html`
    pub fn accepted(html: impl Into<String>) -> Self {
        Self {
            success: true,
            html: Some(html.into()),
            ..Self::default()
        }
    }

    /// Failed reply with a message
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// Rendered comment for `scheme`, accepting the other key as a fallback
    pub fn fragment(&self, scheme: AddressingScheme) -> Option<&str> {
        let (primary, fallback) = match scheme {
            AddressingScheme::UrlRewrite => (&self.html, &self.comment_html),
            AddressingScheme::ParentField => (&self.comment_html, &self.html),
        };
        primary
            .as_deref()
            .or(fallback.as_deref())
            .filter(|markup| !markup.trim().is_empty())
    }

    /// Interpret the reply
    ///
    /// A success flag without any markup is treated as a rejection, since
    /// there is nothing to show.
    pub fn verdict(&self, scheme: AddressingScheme) -> ReplyVerdict {
        if self.success {
            if let Some(markup) = self.fragment(scheme) {
                return ReplyVerdict::Accepted(markup.to_string());
            }
            return ReplyVerdict::Rejected(
                "The server did not return the new comment.".to_string(),
            );
        }

        let message = self
            .error
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .unwrap_or(GENERIC_REJECTION);
        ReplyVerdict::Rejected(message.to_string())
    }
}
