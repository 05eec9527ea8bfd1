//! rp-client - HTTP transports for recipe-page
//!
//! Implements the comment and rating ports of `rp-core` on top of
//! `reqwest`, posting multipart forms the way the page's own scripts do.

pub mod error;
pub mod http;
pub mod rating;
pub mod transport;

pub use error::{ClientError, ClientResult};
pub use http::HttpSite;
pub use rating::HttpRatingSubmitter;
pub use transport::HttpCommentTransport;
