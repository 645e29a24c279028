use crate::mvi::Intent;

use super::kind::ItemKind;

#[derive(Debug)]
pub enum InventoryIntent {
    /// The runtime reported one `kind` collected, worth `worth`.
    Collect { kind: ItemKind, worth: u64 },

    /// The user sold everything: every known count and the value go to 0.
    Commit,
}

impl Intent for InventoryIntent {}
