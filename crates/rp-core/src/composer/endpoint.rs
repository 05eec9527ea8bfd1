//! Comment endpoint addressing

use crate::error::{RecipePageError, Result};
use crate::types::CommentId;
use serde::{Deserialize, Serialize};

/// Path segment the comment endpoint ends with
const COMMENT_SEGMENT: &str = "/comment/";

/// How the server learns which comment a reply belongs to
///
/// A page uses exactly one scheme; the two are not interchangeable on the
/// same server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddressingScheme {
    /// Replies go to `.../comment/{id}/reply/`; fragment under `html`
    #[default]
    UrlRewrite,
    /// One endpoint; parent id in a form field; fragment under `comment_html`
    ParentField,
}

impl AddressingScheme {
    /// Endpoint path for a post with an optional reply target
    pub fn resolve_path(&self, base: &str, target: Option<&CommentId>) -> Result<String> {
        if base.trim().is_empty() {
            return Err(RecipePageError::InvalidEndpoint {
                url: base.to_string(),
                reason: "comment form has no endpoint".to_string(),
            });
        }

        match (self, target) {
            (AddressingScheme::UrlRewrite, Some(id)) => {
                let prefix = base.strip_suffix(COMMENT_SEGMENT).ok_or_else(|| {
                    RecipePageError::InvalidEndpoint {
                        url: base.to_string(),
                        reason: format!("expected a path ending in '{}'", COMMENT_SEGMENT),
                    }
                })?;
                Ok(format!("{}{}{}/reply/", prefix, COMMENT_SEGMENT, id))
            }
            _ => Ok(base.to_string()),
        }
    }

    /// Whether the parent id travels as a form field
    pub fn sends_parent_field(&self) -> bool {
        matches!(self, AddressingScheme::ParentField)
    }
}

impl std::fmt::Display for AddressingScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressingScheme::UrlRewrite => write!(f, "url-rewrite"),
            AddressingScheme::ParentField => write!(f, "parent-field"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "/api/recipes/recipe/pasta/comment/";

    #[test]
    fn test_url_rewrite_top_level_is_verbatim() {
        let path = AddressingScheme::UrlRewrite.resolve_path(BASE, None).unwrap();
        assert_eq!(path, BASE);
    }

    #[test]
    fn test_url_rewrite_reply() {
        let path = AddressingScheme::UrlRewrite
            .resolve_path(BASE, Some(&CommentId::from("42")))
            .unwrap();
        assert_eq!(path, "/api/recipes/recipe/pasta/comment/42/reply/");
    }

    #[test]
    fn test_url_rewrite_absolute_url() {
        let path = AddressingScheme::UrlRewrite
            .resolve_path("https://example.org/r/comment/", Some(&CommentId::from("7")))
            .unwrap();
        assert_eq!(path, "https://example.org/r/comment/7/reply/");
    }

    #[test]
    fn test_url_rewrite_requires_comment_segment() {
        let result = AddressingScheme::UrlRewrite
            .resolve_path("/api/recipes/recipe/pasta/comments", Some(&CommentId::from("42")));
        assert!(matches!(result, Err(RecipePageError::InvalidEndpoint { .. })));
    }

    #[test]
    fn test_parent_field_never_rewrites() {
        let path = AddressingScheme::ParentField
            .resolve_path(BASE, Some(&CommentId::from("42")))
            .unwrap();
        assert_eq!(path, BASE);
        assert!(AddressingScheme::ParentField.sends_parent_field());
    }

    #[test]
    fn test_empty_endpoint() {
        assert!(AddressingScheme::ParentField.resolve_path("  ", None).is_err());
    }

    #[test]
    fn test_serde_names() {
        let scheme: AddressingScheme = serde_json::from_str("\"parent-field\"").unwrap();
        assert_eq!(scheme, AddressingScheme::ParentField);
        assert_eq!(AddressingScheme::UrlRewrite.to_string(), "url-rewrite");
    }
}
