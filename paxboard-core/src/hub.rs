//! Data-change hub: publish/subscribe for entity lifecycle events.
//!
//! The hub decouples the data layer from however many UI subscribers are
//! currently mounted: after a confirmed mutation, the entity client publishes
//! the canonical server value on a `(category, change)` key, and every
//! handler registered for that key is invoked synchronously, in subscription
//! order. Publish is fire-and-forget: handler return values are ignored and
//! there is no batching, reordering, or deduplication.
//!
//! Unlike a process-global hub, a [`Hub`] is an ordinary value: construct one
//! at startup and hand it (usually via `Arc`) to the publisher and the
//! subscribers. Subscription lifetime is explicit — [`Hub::subscribe`]
//! returns a [`SubscriptionId`] that the owner passes to
//! [`Hub::unsubscribe`] on teardown, so nothing dangles after a subscriber
//! goes away.
//!
//! Handlers run while the subscriber registry is locked; they must not call
//! back into the same hub.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::debug;

/// The kind of change a publication announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Create,
    Update,
    Delete,
}

impl ChangeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeKind::Create => "create",
            ChangeKind::Update => "update",
            ChangeKind::Delete => "delete",
        }
    }
}

/// Routing key for a publication: entity category plus change kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HubKey {
    pub category: &'static str,
    pub change: ChangeKind,
}

impl HubKey {
    pub const fn new(category: &'static str, change: ChangeKind) -> Self {
        Self { category, change }
    }
}

/// Handle returned by [`Hub::subscribe`], used to deregister the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler<P> = Box<dyn Fn(&P) + Send>;

struct Registry<P> {
    subscribers: HashMap<HubKey, Vec<(SubscriptionId, Handler<P>)>>,
    next_id: u64,
}

/// Publish/subscribe channel for data-change notifications.
///
/// Generic over the payload type `P`; one hub instance carries one entity
/// payload type (the hub value itself plays the role of a topic).
pub struct Hub<P> {
    registry: Mutex<Registry<P>>,
}

impl<P> Default for Hub<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Hub<P> {
    /// Create an empty hub
    pub fn new() -> Self {
        Self {
            registry: Mutex::new(Registry {
                subscribers: HashMap::new(),
                next_id: 0,
            }),
        }
    }

    /// Register a handler for a key.
    ///
    /// Handlers for the same key are invoked in subscription order.
    pub fn subscribe<F>(&self, key: HubKey, handler: F) -> SubscriptionId
    where
        F: Fn(&P) + Send + 'static,
    {
        let mut registry = self.lock();
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        registry
            .subscribers
            .entry(key)
            .or_default()
            .push((id, Box::new(handler)));
        id
    }

    /// Remove a previously registered handler.
    ///
    /// Returns `false` if the id was already removed (or never existed).
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registry = self.lock();
        let mut removed = false;
        for handlers in registry.subscribers.values_mut() {
            let before = handlers.len();
            handlers.retain(|(sub_id, _)| *sub_id != id);
            removed |= handlers.len() != before;
        }
        removed
    }

    /// Deliver a payload to every handler registered for `key`.
    ///
    /// Delivery is synchronous and in subscription order. A key with no
    /// subscribers is a no-op.
    pub fn publish(&self, key: HubKey, payload: &P) {
        let registry = self.lock();
        let handlers = registry.subscribers.get(&key);
        let count = handlers.map(|h| h.len()).unwrap_or(0);
        debug!(
            category = key.category,
            change = key.change.as_str(),
            subscribers = count,
            "hub publish"
        );
        if let Some(handlers) = handlers {
            for (_, handler) in handlers {
                handler(payload);
            }
        }
    }

    /// Number of handlers currently registered for a key
    pub fn subscriber_count(&self, key: HubKey) -> usize {
        self.lock()
            .subscribers
            .get(&key)
            .map(|h| h.len())
            .unwrap_or(0)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Registry<P>> {
        self.registry.lock().expect("hub subscriber registry poisoned")
    }
}
