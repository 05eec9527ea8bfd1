//! Comment composer
//!
//! Tracks the reply target, builds the form post for the comment endpoint,
//! and merges the server's reply into the comment tree.

pub mod endpoint;
pub mod request;
pub mod reply;
pub mod transport;
pub mod widget;

pub use endpoint::AddressingScheme;
pub use request::{CommentForm, CommentRequest};
pub use reply::{ReplyVerdict, ServerReply, GENERIC_REJECTION};
pub use transport::CommentTransport;
pub use widget::{
    CommentComposer, ComposerSettings, ReplyTarget, SubmitOutcome, SubmitStart, TRANSPORT_FAILURE,
};
