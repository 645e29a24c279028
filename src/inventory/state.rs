use indexmap::IndexMap;
use serde::Serialize;

use crate::mvi::ViewState;

use super::kind::ItemKind;

/// Collected counts plus accumulated value, observed atomically by views.
///
/// Keys keep first-collection order and are never removed: a commit zeroes
/// them in place so previously seen kinds keep their position.
///
/// Equality compares contents, not key order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct InventorySnapshot {
    entries: IndexMap<ItemKind, u32>,
    value: u64,
}

impl ViewState for InventorySnapshot {}

impl InventorySnapshot {
    pub fn count(&self, kind: &ItemKind) -> u32 {
        self.entries.get(kind).copied().unwrap_or(0)
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Every known kind in first-collection order, zero counts included.
    pub fn entries(&self) -> impl Iterator<Item = (&ItemKind, u32)> {
        self.entries.iter().map(|(kind, count)| (kind, *count))
    }

    /// Kinds with a count above zero, in first-collection order.
    pub fn populated(&self) -> impl Iterator<Item = (&ItemKind, u32)> {
        self.entries().filter(|(_, count)| *count > 0)
    }

    pub fn known_kinds(&self) -> impl Iterator<Item = &ItemKind> {
        self.entries.keys()
    }

    pub fn total_items(&self) -> u64 {
        self.entries.values().map(|count| u64::from(*count)).sum()
    }

    /// All counts and the value are zero.
    pub fn is_zeroed(&self) -> bool {
        self.value == 0 && self.entries.values().all(|count| *count == 0)
    }

    pub(crate) fn record(&mut self, kind: ItemKind, worth: u64) {
        let count = self.entries.entry(kind).or_insert(0);
        *count = count.saturating_add(1);
        self.value = self.value.saturating_add(worth);
    }

    pub(crate) fn zero(&mut self) {
        for count in self.entries.values_mut() {
            *count = 0;
        }
        self.value = 0;
    }
}
