//! Comment transport over HTTP

use crate::error::ClientError;
use crate::http::HttpSite;
use async_trait::async_trait;
use rp_core::composer::{CommentRequest, CommentTransport, ServerReply};
use rp_core::{RecipePageError, Result};
use tracing::{debug, warn};

/// Posts comments as multipart forms and decodes the JSON reply
#[derive(Debug, Clone)]
pub struct HttpCommentTransport {
    site: HttpSite,
}

impl HttpCommentTransport {
    /// Send comments through `site`; request paths resolve against its base
    pub fn new(site: HttpSite) -> Self {
        Self { site }
    }
}

#[async_trait]
impl CommentTransport for HttpCommentTransport {
    async fn post_comment(&self, request: &CommentRequest) -> Result<ServerReply> {
        let raw = self
            .site
            .post_form(&request.url, &request.fields, request.requested_with)
            .await?;

        // Error statuses still carry `{success: false, error}` bodies
        match serde_json::from_str::<ServerReply>(&raw.body) {
            Ok(reply) => {
                debug!("Comment reply: status={} success={}", raw.status, reply.success);
                Ok(reply)
            }
            Err(e) => {
                warn!("Comment endpoint returned non-JSON body ({})", raw.status);
                Err(RecipePageError::from(ClientError::InvalidReply {
                    status: raw.status,
                    reason: e.to_string(),
                }))
            }
        }
    }
}
