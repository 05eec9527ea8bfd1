//! Rating submission over HTTP

use crate::error::ClientError;
use crate::http::HttpSite;
use async_trait::async_trait;
use rp_core::rating::{RatingReceipt, RatingSubmitter};
use rp_core::types::RatingValue;
use rp_core::{RecipePageError, Result};
use serde::Deserialize;
use tracing::info;

/// Optional JSON body of a rating response
#[derive(Debug, Default, Deserialize)]
struct RatingReply {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Posts the committed rating to the recipe's rate endpoint
#[derive(Debug, Clone)]
pub struct HttpRatingSubmitter {
    site: HttpSite,
    endpoint: String,
    field: String,
    hidden: Vec<(String, String)>,
}

impl HttpRatingSubmitter {
    /// Submit to `endpoint`, sending the value as `field`
    pub fn new(site: HttpSite, endpoint: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            site,
            endpoint: endpoint.into(),
            field: field.into(),
            hidden: Vec::new(),
        }
    }

    /// Send an extra field with every rating, e.g. a CSRF token
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.hidden.push((name.into(), value.into()));
        self
    }
}

#[async_trait]
impl RatingSubmitter for HttpRatingSubmitter {
    async fn submit_rating(&self, value: RatingValue) -> Result<RatingReceipt> {
        let mut fields = self.hidden.clone();
        fields.push((self.field.clone(), value.echo()));

        let raw = self.site.post_form(&self.endpoint, &fields, true).await?;
        let reply = serde_json::from_str::<RatingReply>(&raw.body).ok();

        match reply {
            Some(RatingReply {
                success: Some(false),
                error,
                message,
            }) => Err(RecipePageError::Rejected(
                error
                    .or(message)
                    .unwrap_or_else(|| "Rating was not accepted".to_string()),
            )),
            _ if !raw.is_success() => Err(ClientError::Status(raw.status).into()),
            reply => {
                info!("Rating {} accepted", value.echo());
                Ok(RatingReceipt {
                    value,
                    message: reply.and_then(|r| r.message),
                })
            }
        }
    }
}
