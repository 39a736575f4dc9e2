//! Single-topic change-notification bus.
//!
//! # Responsibility
//! - Let views learn that "data may have changed" without referencing the
//!   component that changed it.
//!
//! # Invariants
//! - Notifications carry no payload; subscribers re-fetch and re-filter.
//! - Every mutation notifies every subscriber; there is no fine-grained
//!   invalidation.
//! - Callbacks may subscribe or unsubscribe during delivery.

use log::debug;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Token returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

/// Zero-payload publish/subscribe channel with a single implicit topic.
///
/// Interior mutability keeps subscribe/publish at `&self`, so the bus can be
/// shared by reference across a single-threaded component tree.
#[derive(Default)]
pub struct ChangeBus {
    subscribers: RefCell<Vec<(u64, Rc<dyn Fn()>)>>,
    next_token: Cell<u64>,
}

impl ChangeBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback to run on every publish.
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> Subscription {
        let token = self.next_token.get();
        self.next_token.set(token + 1);
        self.subscribers
            .borrow_mut()
            .push((token, Rc::new(callback)));
        Subscription(token)
    }

    /// Removes a subscriber. Unknown tokens are ignored.
    pub fn unsubscribe(&self, subscription: Subscription) {
        self.subscribers
            .borrow_mut()
            .retain(|(token, _)| *token != subscription.0);
    }

    /// Notifies every current subscriber, in subscription order.
    ///
    /// The subscriber snapshot is taken before delivery, so callbacks that
    /// mutate the subscriber set take effect from the next publish.
    pub fn publish(&self) {
        let callbacks: Vec<Rc<dyn Fn()>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();

        debug!(
            "event=bus_publish module=bus status=ok subscribers={}",
            callbacks.len()
        );
        for callback in callbacks {
            callback();
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}
