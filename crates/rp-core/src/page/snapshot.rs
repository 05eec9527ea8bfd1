//! Initial page structure

use crate::comment::CommentSeed;
use crate::composer::CommentForm;
use crate::error::{RecipePageError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The recipe the page shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeInfo {
    /// URL slug
    pub slug: String,
    /// Display title
    #[serde(default)]
    pub title: String,
}

impl RecipeInfo {
    /// Title, or the slug when the page has none
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.slug
        } else {
            &self.title
        }
    }
}

/// The star rating widget
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingWidget {
    /// `data-value` of each star; empty means the configured range
    #[serde(default)]
    pub values: Vec<i8>,
    /// Rating endpoint; derived from the slug when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl RatingWidget {
    /// Endpoint the rating is posted to
    pub fn endpoint(&self, slug: &str) -> String {
        self.url
            .clone()
            .unwrap_or_else(|| format!("/api/recipes/recipe/{}/rate/", slug))
    }
}

/// Everything the page carries at load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// Recipe shown on the page
    pub recipe: RecipeInfo,
    /// Rating widget, if the page has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<RatingWidget>,
    /// Comment form, if the page has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_form: Option<CommentForm>,
    /// Comments rendered at load
    #[serde(default)]
    pub comments: Vec<CommentSeed>,
}

impl PageSnapshot {
    /// Parse a snapshot from JSON
    pub fn from_json_str(content: &str) -> Result<Self> {
        let snapshot: PageSnapshot = serde_json::from_str(content)?;
        if snapshot.recipe.slug.trim().is_empty() {
            return Err(RecipePageError::Validation(
                "recipe.slug cannot be empty".to_string(),
            ));
        }
        Ok(snapshot)
    }

    /// Load a snapshot file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RecipePageError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
            .map_err(|e| e.with_context(format!("Failed to read page {}", path.display())))
    }
}
