use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;

use crate::bridge::{
    BridgeError, CommandOutcome, EventBridge, InboundEvent, OutboundCommand, RuntimeEvent,
    Subscription,
};
use crate::config::{CommandTarget, Config, EventsConfig};
use crate::mvi::Reducer;

use super::intent::InventoryIntent;
use super::kind::{ItemKind, KnownKinds};
use super::reducer::InventoryReducer;
use super::slots::{derive_slots, Slot};
use super::state::InventorySnapshot;

/// Everything the store needs from configuration, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRules {
    pub max_slots: usize,
    pub unit_value: u64,
    pub known: KnownKinds,
    pub events: EventsConfig,
    /// Receives the committed value.
    pub display: CommandTarget,
}

impl InventoryRules {
    pub fn from_config(config: &Config) -> Result<Self, BridgeError> {
        Ok(Self {
            max_slots: config.inventory.max_slots,
            unit_value: config.inventory.unit_value,
            known: KnownKinds::from_names(&config.inventory.known_kinds)?,
            events: config.events.clone(),
            display: config.commands.display_value.clone(),
        })
    }
}

impl Default for InventoryRules {
    fn default() -> Self {
        let config = Config::default();
        Self {
            max_slots: config.inventory.max_slots,
            unit_value: config.inventory.unit_value,
            known: KnownKinds::default(),
            events: config.events,
            display: config.commands.display_value,
        }
    }
}

/// What a slot grid renders: the cells and the running value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryView {
    pub slots: Vec<Slot>,
    pub value: u64,
}

impl InventoryView {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Result of a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitReceipt {
    /// Value accumulated before the reset.
    pub value: u64,
    /// Whether the display command reached the runtime.
    pub outcome: CommandOutcome,
}

/// Owner of the inventory state.
///
/// Every mutation goes through the reducer under the watch channel's lock,
/// which makes this the single writer; subscribers see each new snapshot.
pub struct InventoryStore {
    rules: InventoryRules,
    bridge: EventBridge,
    state: watch::Sender<InventorySnapshot>,
}

impl InventoryStore {
    pub fn new(rules: InventoryRules, bridge: EventBridge) -> Self {
        let (state, _) = watch::channel(InventorySnapshot::default());
        Self {
            rules,
            bridge,
            state,
        }
    }

    pub fn rules(&self) -> &InventoryRules {
        &self.rules
    }

    pub fn snapshot(&self) -> InventorySnapshot {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<InventorySnapshot> {
        self.state.subscribe()
    }

    pub fn slots(&self) -> Vec<Slot> {
        derive_slots(&self.state.borrow(), self.rules.max_slots)
    }

    pub fn view(&self) -> InventoryView {
        let state = self.state.borrow();
        InventoryView {
            slots: derive_slots(&state, self.rules.max_slots),
            value: state.value(),
        }
    }

    /// Counts one `kind` and adds the unit value. Returns the new count.
    pub fn on_collect(&self, kind: ItemKind) -> u32 {
        let worth = self.rules.unit_value;
        let lookup = kind.clone();
        let mut count = 0;
        self.state.send_modify(|state| {
            *state = InventoryReducer::reduce(
                std::mem::take(state),
                InventoryIntent::Collect { kind, worth },
            );
            count = state.count(&lookup);
        });
        tracing::trace!(kind = %lookup, count, "Item collected");
        count
    }

    /// Validates a raw item identifier against the known kinds first.
    pub fn collect_raw(&self, raw: &str) -> Result<u32, BridgeError> {
        let kind = self.rules.known.resolve(raw)?;
        Ok(self.on_collect(kind))
    }

    /// Sells everything.
    ///
    /// The value is read and the snapshot zeroed in one step, so a collect
    /// racing with the commit lands either before (and is sold) or after
    /// (and is kept). The display command is sent once the lock is
    /// released, even if the runtime is not ready to receive it.
    pub fn commit(&self) -> CommitReceipt {
        let mut value = 0;
        self.state.send_modify(|state| {
            value = state.value();
            *state = InventoryReducer::reduce(std::mem::take(state), InventoryIntent::Commit);
        });

        let command = OutboundCommand::new(&self.rules.display, Some(value.to_string()));
        let outcome = self.bridge.send(&command);
        tracing::info!(value, ?outcome, "Inventory committed");
        CommitReceipt { value, outcome }
    }

    /// Routes one inbound event; invalid ones go to the bridge quarantine.
    pub fn handle_inbound(&self, event: &InboundEvent) {
        match RuntimeEvent::decode(event, &self.rules.events, &self.rules.known) {
            Ok(RuntimeEvent::ItemCollected(kind)) => {
                self.on_collect(kind);
            }
            Ok(other) => {
                tracing::trace!(?other, "Inbound event not handled by inventory");
            }
            Err(err) => self.bridge.quarantine().admit(event.clone(), err),
        }
    }

    /// Registers the collect handler on the bridge.
    ///
    /// The handler holds a weak reference; once the store is dropped,
    /// events are ignored.
    pub fn attach(self: &Arc<Self>) -> Subscription {
        let store = Arc::downgrade(self);
        self.bridge
            .register_inbound_handler(&self.rules.events.item_collected, move |event| {
                if let Some(store) = store.upgrade() {
                    store.handle_inbound(event);
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::RuntimeSlot;

    fn store() -> InventoryStore {
        InventoryStore::new(InventoryRules::default(), EventBridge::new(RuntimeSlot::new()))
    }

    #[test]
    fn default_rules_match_default_config() {
        let from_config = InventoryRules::from_config(&Config::default()).unwrap();
        assert_eq!(InventoryRules::default(), from_config);
    }

    #[test]
    fn collect_raw_rejects_unknown() {
        let store = store();
        assert!(store.collect_raw("banana").is_err());
        assert!(store.snapshot().is_zeroed());
        assert_eq!(store.snapshot().known_kinds().count(), 0);
    }

    #[test]
    fn commit_without_runtime_still_resets() {
        let store = store();
        store.collect_raw("pear").unwrap();
        let receipt = store.commit();

        assert_eq!(receipt.value, 50);
        assert_eq!(receipt.outcome, CommandOutcome::Suppressed);
        assert!(store.snapshot().is_zeroed());
    }

    #[test]
    fn subscribers_see_each_change() {
        let store = store();
        let mut rx = store.subscribe();
        store.collect_raw("pear").unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().value(), 50);
    }

    #[test]
    fn view_serializes_to_json() {
        let store = InventoryStore::new(
            InventoryRules {
                max_slots: 1,
                ..InventoryRules::default()
            },
            EventBridge::new(RuntimeSlot::new()),
        );
        store.collect_raw("pear").unwrap();
        let json = store.view().to_json().unwrap();
        assert_eq!(
            json,
            r#"{"slots":[{"kind":"pear","count":1,"badge":null}],"value":50}"#
        );
    }
}
