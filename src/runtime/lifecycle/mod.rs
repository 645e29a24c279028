//! Load lifecycle feature module.
//!
//! - `state.rs` - `LoadState` (Unloaded → Loading → Ready | Failed)
//! - `intent.rs` - Loader events (Begin, Instantiated, Rejected)
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::LoadIntent;
pub use reducer::LoadReducer;
pub use state::LoadState;
