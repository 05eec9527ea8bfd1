//! Comment data models

use crate::types::{AuthorHandle, CommentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment on the page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentNode {
    /// Unique comment identifier
    pub id: CommentId,
    /// Author of the comment, when the markup names one
    pub author: Option<AuthorHandle>,
    /// Server-rendered markup
    pub markup: String,
    /// Parent comment for replies
    pub parent: Option<CommentId>,
    /// Replies in display order
    #[serde(default)]
    pub children: Vec<CommentId>,
    /// When the client inserted this node; `None` for comments present at load
    #[serde(default)]
    pub inserted_at: Option<DateTime<Utc>>,
}

impl CommentNode {
    /// Whether this comment is a reply to another comment
    pub fn is_reply(&self) -> bool {
        self.parent.is_some()
    }

    /// Whether the client added this comment after load
    pub fn is_inserted(&self) -> bool {
        self.inserted_at.is_some()
    }

    /// Plain-text rendering of the markup
    pub fn text(&self) -> String {
        super::fragment::plain_text(&self.markup)
    }
}

/// A comment as described by the initial page structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentSeed {
    /// Comment identifier
    pub id: CommentId,
    /// Author handle
    pub author: AuthorHandle,
    /// Rendered markup
    #[serde(default)]
    pub html: String,
    /// Nested replies
    #[serde(default)]
    pub replies: Vec<CommentSeed>,
}

impl CommentSeed {
    /// Create a seed without replies
    pub fn new(id: impl Into<String>, author: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            id: CommentId::from_string(id),
            author: AuthorHandle::new(author),
            html: html.into(),
            replies: Vec::new(),
        }
    }

    /// Add a reply
    pub fn reply(mut self, reply: CommentSeed) -> Self {
        self.replies.push(reply);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_flags() {
        let node = CommentNode {
            id: CommentId::from("7"),
            author: Some(AuthorHandle::from("bob")),
            markup: "<p>Great &amp; easy</p>".to_string(),
            parent: Some(CommentId::from("3")),
            children: vec![],
            inserted_at: None,
        };
        assert!(node.is_reply());
        assert!(!node.is_inserted());
        assert_eq!(node.text(), "Great & easy");
    }

    #[test]
    fn test_seed_deserialization() {
        let json = r#"{
            "id": "1",
            "author": "alice",
            "html": "<p>Lovely</p>",
            "replies": [{"id": "2", "author": "bob"}]
        }"#;
        let seed: CommentSeed = serde_json::from_str(json).unwrap();
        assert_eq!(seed.id, CommentId::from("1"));
        assert_eq!(seed.replies.len(), 1);
        assert_eq!(seed.replies[0].html, "");
        assert!(seed.replies[0].replies.is_empty());
    }
}
