//! Inventory feature module.
//!
//! - `kind.rs` - Validated item identifiers and the known set
//! - `state.rs` - `InventorySnapshot` (ordered counts + accumulated value)
//! - `intent.rs` - Collect / Commit
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `slots.rs` - Bounded slot view derived from a snapshot
//! - `store.rs` - `InventoryStore`, which owns the state and talks to the bridge

mod intent;
mod kind;
mod reducer;
mod slots;
mod state;
mod store;

pub use intent::InventoryIntent;
pub use kind::{ItemKind, KnownKinds};
pub use reducer::InventoryReducer;
pub use slots::{derive_slots, Slot};
pub use state::InventorySnapshot;
pub use store::{CommitReceipt, InventoryRules, InventoryStore, InventoryView};
