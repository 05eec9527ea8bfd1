//! Delegated event routing

use super::event::{EventKind, EventTarget, PageEvent};
use tracing::trace;

type Matcher<A> = Box<dyn Fn(&EventTarget) -> Option<A> + Send + Sync>;

struct Subscription<A> {
    kind: EventKind,
    matcher: Matcher<A>,
}

/// Routes events to actions by kind and target predicate
///
/// Nothing is bound to individual elements: every event is matched against
/// every subscription of its kind when it is dispatched.
pub struct EventRouter<A> {
    subscriptions: Vec<Subscription<A>>,
}

impl<A> EventRouter<A> {
    /// Create a router with no subscriptions
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
        }
    }

    /// Subscribe to `kind`; `matcher` returns an action for targets it wants
    pub fn on<F>(&mut self, kind: EventKind, matcher: F) -> &mut Self
    where
        F: Fn(&EventTarget) -> Option<A> + Send + Sync + 'static,
    {
        self.subscriptions.push(Subscription {
            kind,
            matcher: Box::new(matcher),
        });
        self
    }

    /// Actions for `event`, in subscription order
    pub fn route(&self, event: &PageEvent) -> Vec<A> {
        let actions: Vec<A> = self
            .subscriptions
            .iter()
            .filter(|s| s.kind == event.kind)
            .filter_map(|s| (s.matcher)(&event.target))
            .collect();
        trace!(
            "Routed {:?} on {:?} to {} action(s)",
            event.kind,
            event.target.role,
            actions.len()
        );
        actions
    }

    /// Number of subscriptions
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Check if there are no subscriptions
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl<A> Default for EventRouter<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> std::fmt::Debug for EventRouter<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRouter")
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}
