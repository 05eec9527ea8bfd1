//! Page events and delegated routing
//!
//! Input is described by what kind of event happened and the role of the
//! element it happened on. Handlers subscribe by kind plus a predicate on the
//! target, so elements added after load (new comments) are matched the same
//! way as the ones present at load.

pub mod event;
pub mod router;

pub use event::{ElementRole, EventKind, EventTarget, PageEvent};
pub use router::EventRouter;
