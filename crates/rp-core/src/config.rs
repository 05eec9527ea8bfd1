//! Configuration management for recipe-page

use crate::composer::AddressingScheme;
use crate::error::{RecipePageError, Result};
use crate::rating::RatingScale;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site settings
    pub site: SiteConfig,
    /// Comment composer settings
    pub comments: CommentsConfig,
    /// Rating widget settings
    pub rating: RatingConfig,
    /// HTTP client settings
    pub http: HttpConfig,
    /// UI settings
    pub ui: UiConfig,
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| RecipePageError::Toml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RecipePageError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| e.with_context(format!("Failed to load {}", path.display())))
    }

    /// Load a configuration file, or the defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Serialize to pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| RecipePageError::Toml(e.to_string()))
    }

    /// Check values that serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.site.base_url).map_err(|e| {
            RecipePageError::Config(format!("site.base_url '{}': {}", self.site.base_url, e))
        })?;

        RatingScale::new(self.rating.min, self.rating.max)?;

        if self.comments.placeholder.trim().is_empty() {
            return Err(RecipePageError::Config(
                "comments.placeholder cannot be empty".to_string(),
            ));
        }
        if !self.comments.reply_placeholder.contains("{author}") {
            return Err(RecipePageError::Config(
                "comments.reply_placeholder must contain {author}".to_string(),
            ));
        }
        if self.comments.content_field.trim().is_empty() {
            return Err(RecipePageError::Config(
                "comments.content_field cannot be empty".to_string(),
            ));
        }
        if self.comments.addressing == AddressingScheme::ParentField
            && self.comments.parent_field.trim().is_empty()
        {
            return Err(RecipePageError::Config(
                "comments.parent_field is required for the parent-field scheme".to_string(),
            ));
        }
        if self.http.timeout_secs == Some(0) {
            return Err(RecipePageError::Config(
                "http.timeout_secs must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// Site-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL the page's relative endpoint paths are resolved against
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

/// Comment composer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsConfig {
    /// How reply targets are addressed on the server
    pub addressing: AddressingScheme,
    /// Form field carrying the comment text
    pub content_field: String,
    /// Form field carrying the parent id (parent-field scheme)
    pub parent_field: String,
    /// Send `X-Requested-With: XMLHttpRequest`
    pub requested_with_header: bool,
    /// Default composer prompt
    pub placeholder: String,
    /// Prompt while replying; `{author}` is replaced by the author handle
    pub reply_placeholder: String,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            addressing: AddressingScheme::UrlRewrite,
            content_field: "content".to_string(),
            parent_field: "parent".to_string(),
            requested_with_header: true,
            placeholder: "Write a comment...".to_string(),
            reply_placeholder: "Replying to @{author}...".to_string(),
        }
    }
}

/// How the rating widget submits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RatingSubmitMode {
    /// No transport; submitting reports that it is not implemented
    #[default]
    Disabled,
    /// POST to the recipe's rate endpoint
    Http,
}

/// Rating widget configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Lowest supported value
    pub min: i8,
    /// Highest supported value
    pub max: i8,
    /// Submission transport
    pub submit: RatingSubmitMode,
    /// Form field carrying the rating value
    pub field: String,
}

impl RatingConfig {
    /// Build the rating scale
    pub fn scale(&self) -> Result<RatingScale> {
        RatingScale::new(self.min, self.max)
    }
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            min: -5,
            max: 5,
            submit: RatingSubmitMode::Disabled,
            field: "rating".to_string(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Request timeout in seconds; no timeout when unset
    pub timeout_secs: Option<u64>,
    /// User agent header
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: format!("recipe-page/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// UI-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color theme
    pub theme: String,
    /// Show the key help overlay on start
    pub show_help_on_start: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            show_help_on_start: false,
        }
    }
}
