//! Insertion port for new comments

use super::fragment::CommentFragment;
use super::tree::CommentTree;
use crate::error::Result;
use crate::types::CommentId;

/// Where a new comment goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Head of the top-level list
    TopLevel,
    /// End of the replies of a comment
    ReplyTo(CommentId),
}

impl Placement {
    /// Placement for an optional reply target
    pub fn for_target(target: Option<&CommentId>) -> Self {
        match target {
            Some(id) => Placement::ReplyTo(id.clone()),
            None => Placement::TopLevel,
        }
    }

    /// Insert `fragment` into `sink` at this placement
    pub fn apply<S: CommentSink + ?Sized>(
        &self,
        sink: &mut S,
        fragment: CommentFragment,
    ) -> Result<CommentId> {
        match self {
            Placement::TopLevel => sink.prepend_top_level(fragment),
            Placement::ReplyTo(parent) => sink.append_reply(parent, fragment),
        }
    }
}

/// Receiver of comments returned by the server
///
/// Implementations must return `CommentNotFound` when the reply parent is
/// not present rather than dropping the fragment.
pub trait CommentSink {
    /// Insert at the head of the top-level list
    fn prepend_top_level(&mut self, fragment: CommentFragment) -> Result<CommentId>;

    /// Append to the replies of `parent`
    fn append_reply(&mut self, parent: &CommentId, fragment: CommentFragment) -> Result<CommentId>;
}

impl CommentSink for CommentTree {
    fn prepend_top_level(&mut self, fragment: CommentFragment) -> Result<CommentId> {
        CommentTree::prepend_top_level(self, fragment)
    }

    fn append_reply(&mut self, parent: &CommentId, fragment: CommentFragment) -> Result<CommentId> {
        CommentTree::append_reply(self, parent, fragment)
    }
}
