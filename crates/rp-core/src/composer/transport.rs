//! Comment transport port

use super::reply::ServerReply;
use super::request::CommentRequest;
use crate::error::Result;
use async_trait::async_trait;

/// Sends comment posts to the server
///
/// Errors mean the request did not complete or the body was not a valid
/// reply; a reply with `success: false` is returned as `Ok`.
#[async_trait]
pub trait CommentTransport: Send + Sync {
    /// POST `request` and decode the JSON reply
    async fn post_comment(&self, request: &CommentRequest) -> Result<ServerReply>;
}
