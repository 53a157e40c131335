//! Scoped teardown handles for listeners that outlive a single event.
//!
//! DESIGN
//! ======
//! Click-outside and document keydown listeners exist only while a widget is
//! open or a drag is in progress. Whoever registers such a listener wraps its
//! removal in a [`Subscription`] and stores the handle on the widget instance.
//! Dropping or cancelling the handle removes the listener, so there is never a
//! permanently registered global handler to leak.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use std::fmt;

/// Owns the teardown of one registered listener. The teardown runs exactly
/// once: on [`Subscription::cancel`] or on drop, whichever comes first.
#[must_use = "dropping a Subscription immediately tears it down"]
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self { teardown: Some(Box::new(teardown)) }
    }

    /// A handle with nothing to tear down, for environments where the
    /// listener could not be registered.
    pub fn noop() -> Self {
        Self { teardown: None }
    }

    /// Tear down now.
    pub fn cancel(mut self) {
        self.run_teardown();
    }

    fn run_teardown(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_teardown();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.teardown.is_some())
            .finish()
    }
}

/// Holds at most one [`Subscription`]. Installing a new handle tears down the
/// previous one first.
#[derive(Debug, Default)]
pub struct SubscriptionSlot {
    current: Option<Subscription>,
}

impl SubscriptionSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, subscription: Subscription) {
        self.clear();
        self.current = Some(subscription);
    }

    pub fn clear(&mut self) {
        if let Some(subscription) = self.current.take() {
            subscription.cancel();
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}
