//! Bridge between a UI layer and an embedded, independently built game
//! runtime.
//!
//! The crate owns three pieces of state-machine logic:
//! - [`runtime`]: one-shot asynchronous loading of the runtime into a
//!   reserved rendering surface (`Unloaded → Loading → Ready | Failed`).
//! - [`bridge`]: the narrow bidirectional channel. The runtime raises named
//!   events through an [`bridge::InboundPort`]; the UI sends commands that
//!   are suppressed until the runtime is ready.
//! - [`inventory`]: collected items, accumulated value and the bounded slot
//!   view derived from them.
//!
//! [`session::BridgeSession`] wires them together for one mount of the UI.

pub mod bridge;
pub mod config;
pub mod counter;
pub mod inventory;
pub mod logging;
pub mod mvi;
pub mod runtime;
pub mod session;
