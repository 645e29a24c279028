//! One mount of the bridge.
//!
//! Mount order matters: inbound handlers are registered before the loader
//! starts, so nothing the runtime raises during boot misses them.

use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::bridge::{BridgeError, CommandOutcome, EventBridge, Subscription};
use crate::config::{Config, ConfigError};
use crate::counter::CounterStore;
use crate::inventory::{CommitReceipt, InventoryRules, InventoryStore, InventoryView};
use crate::runtime::{LoadState, RuntimeHost, RuntimeLoader, RuntimeSlot};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid inventory configuration: {0}")]
    Inventory(#[from] BridgeError),
}

pub struct BridgeSession {
    host: Arc<dyn RuntimeHost>,
    slot: RuntimeSlot,
    bridge: EventBridge,
    loader: Arc<RuntimeLoader>,
    inventory: Arc<InventoryStore>,
    counter: Arc<CounterStore>,
    subscriptions: Vec<Subscription>,
    load_task: Option<JoinHandle<()>>,
}

impl BridgeSession {
    /// Wires the bridge and starts loading the runtime in the background.
    ///
    /// Returns immediately; the UI renders while the load is in flight.
    /// Must be called from within a tokio runtime.
    pub fn mount(config: Config, host: Arc<dyn RuntimeHost>) -> Result<Self, SessionError> {
        config.validate()?;
        let rules = InventoryRules::from_config(&config)?;

        let slot = RuntimeSlot::new();
        let bridge = EventBridge::new(slot.clone());
        let inventory = Arc::new(InventoryStore::new(rules, bridge.clone()));
        let counter = Arc::new(CounterStore::new(&config, bridge.clone()));
        let subscriptions = vec![inventory.attach(), counter.attach()];

        let loader = Arc::new(RuntimeLoader::new(
            Arc::clone(&host),
            config.runtime.mount_point.clone(),
            slot.clone(),
            bridge.inbound_port(),
        ));
        let load_task = loader.spawn(config.runtime.assets.clone());

        tracing::info!(mount_point = %config.runtime.mount_point, "Bridge session mounted");

        Ok(Self {
            host,
            slot,
            bridge,
            loader,
            inventory,
            counter,
            subscriptions,
            load_task: Some(load_task),
        })
    }

    pub fn bridge(&self) -> &EventBridge {
        &self.bridge
    }

    pub fn loader(&self) -> &RuntimeLoader {
        &self.loader
    }

    pub fn inventory(&self) -> &InventoryStore {
        &self.inventory
    }

    pub fn counter(&self) -> &CounterStore {
        &self.counter
    }

    pub fn load_state(&self) -> LoadState {
        self.loader.state()
    }

    pub fn view(&self) -> InventoryView {
        self.inventory.view()
    }

    /// The sell action.
    pub fn commit(&self) -> CommitReceipt {
        self.inventory.commit()
    }

    pub fn request_runtime_increment(&self) -> CommandOutcome {
        self.counter.request_runtime_increment()
    }

    /// Tears the session down.
    ///
    /// Inbound handlers go first. A load still in flight is aborted and
    /// settles as `Failed`, then the handle is released so later commands
    /// are suppressed, and the host is asked to remove whatever surface was
    /// mounted.
    pub async fn unmount(mut self) {
        self.subscriptions.clear();

        if let Some(task) = self.load_task.take() {
            if !task.is_finished() {
                tracing::warn!("Unmounting while the runtime is still loading; aborting load");
                task.abort();
            }
            if let Err(err) = task.await {
                if !err.is_cancelled() {
                    tracing::error!(error = %err, "Runtime load task panicked");
                }
            }
        }
        self.slot.clear();

        if let Some(surface) = self.loader.surface() {
            self.host.unmount_surface(surface).await;
            tracing::debug!(?surface, "Rendering surface removed");
        }

        tracing::info!("Bridge session unmounted");
    }
}
