//! Rating submission port

use crate::error::{RecipePageError, Result};
use crate::types::RatingValue;
use async_trait::async_trait;

/// Acknowledgement of a submitted rating
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingReceipt {
    /// Value that was sent
    pub value: RatingValue,
    /// Message from the server, if any
    pub message: Option<String>,
}

/// Sends a committed rating somewhere
#[async_trait]
pub trait RatingSubmitter: Send + Sync {
    /// Submit `value`
    async fn submit_rating(&self, value: RatingValue) -> Result<RatingReceipt>;
}

/// Submitter for pages without a rating transport
///
/// Always fails with `NotImplemented`, so callers can tell the user the
/// value was not sent.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingRatingSubmitter;

#[async_trait]
impl RatingSubmitter for PendingRatingSubmitter {
    async fn submit_rating(&self, value: RatingValue) -> Result<RatingReceipt> {
        tracing::warn!("Rating {} not sent: no rating transport configured", value.echo());
        Err(RecipePageError::NotImplemented(format!(
            "rating submission (selected {})",
            value.echo()
        )))
    }
}
