//! Event handling

use crossterm::event::KeyEvent;
use rp_core::comment::Placement;
use rp_core::composer::ServerReply;
use rp_core::rating::RatingReceipt;

/// Application events
#[derive(Debug)]
pub enum Event {
    /// Keyboard input
    Input(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// A comment request finished
    CommentFinished {
        placement: Placement,
        reply: rp_core::Result<ServerReply>,
    },
    /// A rating request finished
    RatingFinished(rp_core::Result<RatingReceipt>),
}
