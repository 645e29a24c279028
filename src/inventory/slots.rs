//! Fixed-capacity slot view derived from a snapshot.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::kind::ItemKind;
use super::state::InventorySnapshot;

/// One cell of the inventory grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Empty,
    Filled { kind: ItemKind, count: u32 },
}

impl Slot {
    pub fn kind(&self) -> Option<&ItemKind> {
        match self {
            Slot::Empty => None,
            Slot::Filled { kind, .. } => Some(kind),
        }
    }

    pub fn count(&self) -> u32 {
        match self {
            Slot::Empty => 0,
            Slot::Filled { count, .. } => *count,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// Quantity badge: shown only when more than one item sits in the slot.
    pub fn badge(&self) -> Option<u32> {
        match self {
            Slot::Filled { count, .. } if *count > 1 => Some(*count),
            _ => None,
        }
    }
}

impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut slot = serializer.serialize_struct("Slot", 3)?;
        slot.serialize_field("kind", &self.kind())?;
        slot.serialize_field("count", &self.count())?;
        slot.serialize_field("badge", &self.badge())?;
        slot.end()
    }
}

/// Exactly `max_slots` cells: populated kinds first in collection order,
/// then empty placeholders.
///
/// Kinds beyond `max_slots` are not displayed (truncated, never wrapped).
pub fn derive_slots(snapshot: &InventorySnapshot, max_slots: usize) -> Vec<Slot> {
    let mut slots: Vec<Slot> = snapshot
        .populated()
        .take(max_slots)
        .map(|(kind, count)| Slot::Filled {
            kind: kind.clone(),
            count,
        })
        .collect();
    slots.resize(max_slots, Slot::Empty);
    slots
}
