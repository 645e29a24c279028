//! Model-View-Intent primitives shared by the bridge state machines.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers are pure. Anything that crosses the runtime boundary happens in
//! the owner of the state, around the dispatch call.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ViewState;
