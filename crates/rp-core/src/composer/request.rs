//! Comment form and the request built from it

use crate::comment::Placement;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The comment form as rendered by the server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentForm {
    /// Submission endpoint (`data-url`)
    pub url: String,
    /// Visitor is not signed in (`data-guest`)
    #[serde(default)]
    pub guest: bool,
    /// Hidden inputs, e.g. `csrfmiddlewaretoken`
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl CommentForm {
    /// Create a form for signed-in visitors
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            guest: false,
            fields: BTreeMap::new(),
        }
    }

    /// Mark the visitor as a guest
    pub fn guest(mut self) -> Self {
        self.guest = true;
        self
    }

    /// Add a hidden field
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}

/// A comment post ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRequest {
    /// Endpoint path or URL
    pub url: String,
    /// Form fields in submission order
    pub fields: Vec<(String, String)>,
    /// Send `X-Requested-With: XMLHttpRequest`
    pub requested_with: bool,
    /// Where the returned comment goes
    pub placement: Placement,
}

impl CommentRequest {
    /// Value of a form field
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}
