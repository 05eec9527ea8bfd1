//! Core type definitions for recipe-page

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a comment as rendered by the server (`data-comment-id`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub String);

impl CommentId {
    /// Create a CommentId from a string
    pub fn from_string(s: impl Into<String>) -> Self {
        CommentId(s.into())
    }

    /// Generate a client-local id for fragments that carry none
    pub fn local() -> Self {
        let uuid = Uuid::new_v4();
        CommentId(format!("local-{}", &uuid.simple().to_string()[..12]))
    }

    /// Whether this id was generated on the client
    pub fn is_local(&self) -> bool {
        self.0.starts_with("local-")
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CommentId {
    fn from(s: &str) -> Self {
        CommentId(s.to_string())
    }
}

/// Username of a comment author (`data-author-username`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorHandle(pub String);

impl AuthorHandle {
    /// Create an AuthorHandle from a string
    pub fn new(s: impl Into<String>) -> Self {
        AuthorHandle(s.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AuthorHandle {
    fn from(s: &str) -> Self {
        AuthorHandle(s.to_string())
    }
}

/// Star rating magnitude
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingValue(pub i8);

impl RatingValue {
    /// The neutral rating every page starts from
    pub const NEUTRAL: Self = RatingValue(0);

    /// Get the raw value
    pub fn get(self) -> i8 {
        self.0
    }

    /// Format with one decimal place, as shown in the live echo
    pub fn echo(self) -> String {
        format!("{:.1}", f64::from(self.0))
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i8> for RatingValue {
    fn from(v: i8) -> Self {
        RatingValue(v)
    }
}
