//! Bidirectional channel between the UI and the embedded runtime.
//!
//! Inbound, the runtime calls [`InboundPort::raise`] and every handler
//! registered for that event name runs. Outbound, the UI calls
//! [`EventBridge::send_command`], which reaches the runtime only once a
//! [`RuntimeHandle`](crate::runtime::RuntimeHandle) is in the shared slot.

mod command;
mod error;
mod event;
mod quarantine;
mod registry;

use parking_lot::RwLock;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::runtime::RuntimeSlot;

pub use command::{CommandOutcome, OutboundCommand};
pub use error::BridgeError;
pub use event::{InboundEvent, RuntimeEvent};
pub use quarantine::{Quarantine, QuarantinedEvent};
pub use registry::{InboundHandler, InboundPort, Subscription};

use registry::{BridgeStats, HandlerRegistry};

/// Handler registry plus outbound path for one session.
///
/// Cheap to clone; clones share the registry, the runtime slot and the
/// counters.
#[derive(Clone)]
pub struct EventBridge {
    registry: Arc<RwLock<HandlerRegistry>>,
    runtime: RuntimeSlot,
    stats: Arc<BridgeStats>,
    quarantine: Quarantine,
}

impl EventBridge {
    pub fn new(runtime: RuntimeSlot) -> Self {
        Self {
            registry: Arc::new(RwLock::new(HandlerRegistry::default())),
            runtime,
            stats: Arc::new(BridgeStats::default()),
            quarantine: Quarantine::default(),
        }
    }

    /// Installs `handler` for `event_name` until the returned
    /// [`Subscription`] is dropped.
    ///
    /// Register before the runtime is ready; events raised earlier are lost.
    pub fn register_inbound_handler<F>(&self, event_name: &str, handler: F) -> Subscription
    where
        F: Fn(&InboundEvent) + Send + Sync + 'static,
    {
        let id = self.registry.write().register(event_name, Arc::new(handler));
        tracing::debug!(event = event_name, id, "Inbound handler registered");
        Subscription::new(&self.registry, event_name, id)
    }

    /// Port to hand to the runtime at instantiation.
    pub fn inbound_port(&self) -> InboundPort {
        InboundPort::new(Arc::clone(&self.registry), Arc::clone(&self.stats))
    }

    /// Forwards a command if the runtime is ready, otherwise drops it.
    ///
    /// Never fails: a missing runtime is backpressure, not an error.
    pub fn send_command(&self, target: &str, method: &str, argument: Option<&str>) -> CommandOutcome {
        let Some(handle) = self.runtime.get() else {
            self.stats.suppressed.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(object = target, method, "Runtime not ready; command suppressed");
            return CommandOutcome::Suppressed;
        };

        handle.send_message(target, method, argument);
        self.stats.delivered.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(object = target, method, ?argument, "Command delivered");
        CommandOutcome::Delivered
    }

    pub fn send(&self, command: &OutboundCommand) -> CommandOutcome {
        self.send_command(&command.target, &command.method, command.argument.as_deref())
    }

    pub fn is_runtime_ready(&self) -> bool {
        self.runtime.is_present()
    }

    pub fn handler_count(&self, event_name: &str) -> usize {
        self.registry.read().handler_count(event_name)
    }

    pub fn quarantine(&self) -> &Quarantine {
        &self.quarantine
    }

    pub fn delivered_count(&self) -> u64 {
        self.stats.delivered.load(Ordering::Relaxed)
    }

    pub fn suppressed_count(&self) -> u64 {
        self.stats.suppressed.load(Ordering::Relaxed)
    }

    /// Inbound events raised while nothing was registered for them.
    pub fn dropped_event_count(&self) -> u64 {
        self.stats.dropped.load(Ordering::Relaxed)
    }
}
