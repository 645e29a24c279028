//! Bridge configuration: where the runtime build lives, how the inventory
//! behaves, and which names are used on each side of the boundary.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    CommandTarget, CommandsConfig, Config, EventsConfig, InventoryConfig, RuntimeAssets,
    RuntimeConfig,
};
