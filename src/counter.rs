//! Counter mirrored across the boundary.
//!
//! The runtime raises the counter event whenever its own counter moves, and
//! the UI can ask the runtime to increment. The two counts are independent;
//! nothing reconciles them.

use std::sync::Arc;
use tokio::sync::watch;

use crate::bridge::{CommandOutcome, EventBridge, Subscription};
use crate::config::{CommandTarget, Config};

pub struct CounterStore {
    bridge: EventBridge,
    event_name: String,
    command: CommandTarget,
    value: watch::Sender<u64>,
}

impl CounterStore {
    pub fn new(config: &Config, bridge: EventBridge) -> Self {
        let (value, _) = watch::channel(0);
        Self {
            bridge,
            event_name: config.events.counter_incremented.clone(),
            command: config.commands.increment_counter.clone(),
            value,
        }
    }

    pub fn value(&self) -> u64 {
        *self.value.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.value.subscribe()
    }

    /// Returns the new value.
    pub fn increment(&self) -> u64 {
        let mut next = 0;
        self.value.send_modify(|value| {
            *value = value.saturating_add(1);
            next = *value;
        });
        tracing::debug!(counter = next, "UI counter incremented");
        next
    }

    /// Sends the increment command to the runtime (suppressed until ready).
    pub fn request_runtime_increment(&self) -> CommandOutcome {
        self.bridge
            .send_command(&self.command.target, &self.command.method, None)
    }

    pub fn attach(self: &Arc<Self>) -> Subscription {
        let store = Arc::downgrade(self);
        self.bridge
            .register_inbound_handler(&self.event_name, move |_event| {
                if let Some(store) = store.upgrade() {
                    store.increment();
                }
            })
    }
}
