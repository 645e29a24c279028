//! Embedded runtime lifecycle.
//!
//! Loading happens once per session and off the render path:
//! - `host.rs` - The platform seam (surface, loader script, instantiation)
//! - `handle.rs` - The owned handle to a running instance and the slot that
//!   shares it with the bridge
//! - `lifecycle/` - `LoadState` machine (Unloaded → Loading → Ready | Failed)
//! - `loader.rs` - `RuntimeLoader`, which drives the machine

mod error;
mod handle;
mod host;
pub mod lifecycle;
mod loader;

pub use crate::config::RuntimeAssets;
pub use error::{HostError, LoadError};
pub use handle::{RuntimeHandle, RuntimeInstance, RuntimeSlot};
pub use host::{RuntimeHost, SurfaceId};
pub use lifecycle::LoadState;
pub use loader::{RuntimeLoader, UNMOUNTED_REASON};
