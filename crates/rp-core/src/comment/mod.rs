//! Comment system module
//!
//! Holds the comment tree the composer merges server fragments into, the
//! fragment metadata reader, and the insertion port.

pub mod model;
pub mod fragment;
pub mod tree;
pub mod sink;

pub use model::*;
pub use fragment::CommentFragment;
pub use tree::CommentTree;
pub use sink::{CommentSink, Placement};
