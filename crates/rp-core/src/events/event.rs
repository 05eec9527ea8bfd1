//! Event and target descriptions

use crate::types::{AuthorHandle, CommentId, RatingValue};

/// Kind of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Click or key activation
    Click,
    /// Pointer entered the element
    PointerEnter,
    /// Pointer left the element
    PointerLeave,
    /// Form submission
    Submit,
}

/// Role of the element an event happened on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRole {
    /// A star of the rating widget
    Star,
    /// The rating submit button
    RatingSubmit,
    /// A reply control inside a comment
    ReplyToggle,
    /// The comment form
    CommentForm,
    /// The sign-in prompt's close control
    CloseModal,
    /// The area around the sign-in prompt
    ModalBackdrop,
    /// The sign-in prompt itself
    ModalSurface,
    /// Anything else
    Other,
}

/// The element an event happened on, with the data attributes it carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTarget {
    /// Element role
    pub role: ElementRole,
    /// `data-value` of a star
    pub value: Option<RatingValue>,
    /// Id of the enclosing comment
    pub comment: Option<CommentId>,
    /// Author of the enclosing comment
    pub author: Option<AuthorHandle>,
}

impl EventTarget {
    /// Target with only a role
    pub fn role(role: ElementRole) -> Self {
        Self {
            role,
            value: None,
            comment: None,
            author: None,
        }
    }

    /// A star with its value
    pub fn star(value: i8) -> Self {
        Self {
            value: Some(RatingValue(value)),
            ..Self::role(ElementRole::Star)
        }
    }

    /// A reply control inside comment `id`
    pub fn reply_toggle(id: CommentId, author: Option<AuthorHandle>) -> Self {
        Self {
            comment: Some(id),
            author,
            ..Self::role(ElementRole::ReplyToggle)
        }
    }
}

/// One user input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEvent {
    /// What happened
    pub kind: EventKind,
    /// Where it happened
    pub target: EventTarget,
}

impl PageEvent {
    /// Click on `target`
    pub fn click(target: EventTarget) -> Self {
        Self {
            kind: EventKind::Click,
            target,
        }
    }

    /// Pointer entered `target`
    pub fn pointer_enter(target: EventTarget) -> Self {
        Self {
            kind: EventKind::PointerEnter,
            target,
        }
    }

    /// Pointer left `target`
    pub fn pointer_leave(target: EventTarget) -> Self {
        Self {
            kind: EventKind::PointerLeave,
            target,
        }
    }

    /// Submission of the comment form
    pub fn submit_comment() -> Self {
        Self {
            kind: EventKind::Submit,
            target: EventTarget::role(ElementRole::CommentForm),
        }
    }
}
