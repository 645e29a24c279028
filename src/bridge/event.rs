use crate::config::EventsConfig;
use crate::inventory::{ItemKind, KnownKinds};

use super::error::BridgeError;

/// A call the runtime made into the UI, as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    pub name: String,
    pub payload: Option<String>,
}

impl InboundEvent {
    pub fn new(name: impl Into<String>, payload: Option<&str>) -> Self {
        Self {
            name: name.into(),
            payload: payload.map(str::to_string),
        }
    }
}

/// A validated inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeEvent {
    ItemCollected(ItemKind),
    CounterIncremented,
}

impl RuntimeEvent {
    /// Validates `event` against the configured names and item kinds.
    pub fn decode(
        event: &InboundEvent,
        names: &EventsConfig,
        known: &KnownKinds,
    ) -> Result<Self, BridgeError> {
        if event.name == names.item_collected {
            let raw = event
                .payload
                .as_deref()
                .ok_or_else(|| BridgeError::MissingPayload {
                    name: event.name.clone(),
                })?;
            return known.resolve(raw).map(RuntimeEvent::ItemCollected);
        }

        if event.name == names.counter_incremented {
            return Ok(RuntimeEvent::CounterIncremented);
        }

        Err(BridgeError::UnknownEvent {
            name: event.name.clone(),
        })
    }
}
