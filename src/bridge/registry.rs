//! Inbound handler registry and the port the runtime calls through.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use super::event::InboundEvent;

/// Callback for one inbound event name.
///
/// Handlers may be called from whatever thread the runtime uses, and calls
/// are not ordered relative to each other.
pub type InboundHandler = Arc<dyn Fn(&InboundEvent) + Send + Sync>;

#[derive(Default)]
pub(crate) struct HandlerRegistry {
    next_id: u64,
    handlers: HashMap<String, Vec<(u64, InboundHandler)>>,
}

impl HandlerRegistry {
    pub(crate) fn register(&mut self, event_name: &str, handler: InboundHandler) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.handlers
            .entry(event_name.to_string())
            .or_default()
            .push((id, handler));
        id
    }

    pub(crate) fn unregister(&mut self, event_name: &str, id: u64) -> bool {
        let Some(handlers) = self.handlers.get_mut(event_name) else {
            return false;
        };
        let before = handlers.len();
        handlers.retain(|(handler_id, _)| *handler_id != id);
        let removed = handlers.len() != before;
        if handlers.is_empty() {
            self.handlers.remove(event_name);
        }
        removed
    }

    /// Cloned so dispatch runs without holding the registry lock; a
    /// handler may register or unsubscribe while it runs.
    pub(crate) fn handlers_for(&self, event_name: &str) -> Vec<InboundHandler> {
        self.handlers
            .get(event_name)
            .map(|handlers| handlers.iter().map(|(_, h)| Arc::clone(h)).collect())
            .unwrap_or_default()
    }

    pub(crate) fn handler_count(&self, event_name: &str) -> usize {
        self.handlers.get(event_name).map_or(0, Vec::len)
    }
}

/// Delivery counters shared by the port and the bridge.
#[derive(Default)]
pub(crate) struct BridgeStats {
    pub(crate) delivered: AtomicU64,
    pub(crate) suppressed: AtomicU64,
    pub(crate) dropped: AtomicU64,
}

/// Keeps an inbound handler installed until unsubscribed or dropped.
#[must_use = "dropping a Subscription unregisters its handler"]
pub struct Subscription {
    registry: Weak<RwLock<HandlerRegistry>>,
    event_name: String,
    id: u64,
    active: bool,
}

impl Subscription {
    pub(crate) fn new(registry: &Arc<RwLock<HandlerRegistry>>, event_name: &str, id: u64) -> Self {
        Self {
            registry: Arc::downgrade(registry),
            event_name: event_name.to_string(),
            id,
            active: true,
        }
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Some(registry) = self.registry.upgrade() {
            registry.write().unregister(&self.event_name, self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

/// The entry point handed to the runtime at instantiation.
///
/// Replaces a globally reachable callback: the runtime can only reach the
/// handlers registered on the bridge that produced this port.
#[derive(Clone)]
pub struct InboundPort {
    registry: Arc<RwLock<HandlerRegistry>>,
    stats: Arc<BridgeStats>,
}

impl InboundPort {
    pub(crate) fn new(registry: Arc<RwLock<HandlerRegistry>>, stats: Arc<BridgeStats>) -> Self {
        Self { registry, stats }
    }

    /// Delivers one event to every handler registered for `event_name`.
    ///
    /// Returns the number of handlers invoked. With none registered the
    /// event is lost; that risk is accepted, not buffered.
    pub fn raise(&self, event_name: &str, payload: Option<&str>) -> usize {
        let handlers = self.registry.read().handlers_for(event_name);
        if handlers.is_empty() {
            self.stats.dropped.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(event = event_name, "Inbound event dropped: no handler registered");
            return 0;
        }

        let event = InboundEvent::new(event_name, payload);
        for handler in &handlers {
            handler(&event);
        }
        handlers.len()
    }
}
