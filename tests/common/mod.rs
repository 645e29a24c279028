//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_runtime;

use game_bridge::bridge::EventBridge;
use game_bridge::config::Config;
use game_bridge::inventory::{InventoryRules, InventoryStore, ItemKind};
use game_bridge::runtime::{RuntimeAssets, RuntimeLoader, RuntimeSlot};
use std::sync::Arc;

pub use mock_runtime::{FakeHost, Failure};

pub fn kind(name: &str) -> ItemKind {
    ItemKind::parse(name).expect("valid item kind")
}

/// Bridge, inventory and loader wired the way a session wires them.
pub struct Harness {
    pub host: Arc<FakeHost>,
    pub bridge: EventBridge,
    pub loader: Arc<RuntimeLoader>,
    pub inventory: Arc<InventoryStore>,
}

impl Harness {
    pub fn new(host: FakeHost) -> Self {
        let host = Arc::new(host);
        let slot = RuntimeSlot::new();
        let bridge = EventBridge::new(slot.clone());
        let inventory = Arc::new(InventoryStore::new(
            InventoryRules::default(),
            bridge.clone(),
        ));
        let loader = Arc::new(RuntimeLoader::new(
            host.clone(),
            Config::default().runtime.mount_point,
            slot,
            bridge.inbound_port(),
        ));
        Self {
            host,
            bridge,
            loader,
            inventory,
        }
    }

    /// Harness whose runtime has already finished loading.
    pub async fn ready() -> Self {
        let harness = Self::new(FakeHost::new());
        harness
            .loader
            .load(&RuntimeAssets::default())
            .await
            .expect("fake runtime loads");
        harness
    }
}
