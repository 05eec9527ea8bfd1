//! Error types for recipe-page

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for recipe-page
#[derive(Debug, Error)]
pub enum RecipePageError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Comment not found in the tree
    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    /// Duplicate comment identifier
    #[error("Comment already exists: {0}")]
    DuplicateComment(String),

    /// Rating value is not one of the supported points
    #[error("Rating {value} is outside the supported range {min}..={max}")]
    RatingOutOfRange { value: i8, min: i8, max: i8 },

    /// A comment submission is already waiting for the server
    #[error("A comment submission is already in progress")]
    SubmissionInFlight,

    /// The page has no widget of the requested kind
    #[error("Widget not present on this page: {0}")]
    MissingWidget(&'static str),

    /// Endpoint path cannot be used with the configured addressing scheme
    #[error("Invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// HTTP transport failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Server answered but reported a failure
    #[error("Server rejected request: {0}")]
    Rejected(String),

    /// Port has no real implementation wired in
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<RecipePageError>,
    },
}

impl RecipePageError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        RecipePageError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Whether retrying the same action could succeed
    pub fn is_transient(&self) -> bool {
        match self {
            RecipePageError::Transport(_) | RecipePageError::SubmissionInFlight => true,
            RecipePageError::WithContext { source, .. } => source.is_transient(),
            _ => false,
        }
    }
}

/// Result type alias for recipe-page
pub type Result<T> = std::result::Result<T, RecipePageError>;
