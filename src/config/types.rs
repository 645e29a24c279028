use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub runtime: RuntimeConfig,
    #[serde(default)]
    pub inventory: InventoryConfig,
    #[serde(default)]
    pub events: EventsConfig,
    #[serde(default)]
    pub commands: CommandsConfig,
}

/// Where the runtime is mounted and which build it loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Identifier of the region the rendering surface is inserted into.
    #[serde(default = "default_mount_point")]
    pub mount_point: String,
    #[serde(default)]
    pub assets: RuntimeAssets,
}

/// Asset bundle handed to the runtime's instantiation entry point.
///
/// Every field is an opaque string. Paths may point at pre-compressed
/// variants; the bridge forwards them untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeAssets {
    pub loader_script_path: String,
    pub framework_script_path: String,
    pub data_payload_path: String,
    pub code_payload_path: String,
    pub streaming_assets_path: String,
    pub company_name: String,
    pub product_name: String,
    pub product_version: String,
}

/// Inventory behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Number of cells in the slot view (default: 8).
    #[serde(default = "default_max_slots")]
    pub max_slots: usize,
    /// Value added per collected item (default: 50).
    #[serde(default = "default_unit_value")]
    pub unit_value: u64,
    /// Item kinds the runtime may report. Anything else is quarantined.
    #[serde(default = "default_known_kinds")]
    pub known_kinds: Vec<String>,
}

/// Names of the events the runtime raises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsConfig {
    #[serde(default = "default_item_collected_event")]
    pub item_collected: String,
    #[serde(default = "default_counter_event")]
    pub counter_incremented: String,
}

/// Commands the UI sends into the runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandsConfig {
    /// Receives the committed value after a sell.
    #[serde(default = "default_display_command")]
    pub display_value: CommandTarget,
    /// Asks the runtime to bump its own counter.
    #[serde(default = "default_counter_command")]
    pub increment_counter: CommandTarget,
}

/// A method on a named object inside the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandTarget {
    pub target: String,
    pub method: String,
}

impl CommandTarget {
    pub fn new(target: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            method: method.into(),
        }
    }
}

fn default_mount_point() -> String {
    "unity-canvas".to_string()
}

fn default_max_slots() -> usize {
    8
}

fn default_unit_value() -> u64 {
    50
}

fn default_known_kinds() -> Vec<String> {
    ["pear", "tomato", "grape", "orange"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_item_collected_event() -> String {
    "ItemCollected".to_string()
}

fn default_counter_event() -> String {
    "IncrementCounter".to_string()
}

fn default_display_command() -> CommandTarget {
    CommandTarget::new("GameManager", "DisplayValue")
}

fn default_counter_command() -> CommandTarget {
    CommandTarget::new("GameManager", "IncrementCounter")
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            mount_point: default_mount_point(),
            assets: RuntimeAssets::default(),
        }
    }
}

impl Default for RuntimeAssets {
    fn default() -> Self {
        Self {
            loader_script_path: "/Build/WebGL.loader.js".to_string(),
            framework_script_path: "/Build/WebGL.framework.js".to_string(),
            data_payload_path: "/Build/WebGL.data".to_string(),
            code_payload_path: "/Build/WebGL.wasm".to_string(),
            streaming_assets_path: "/StreamingAssets".to_string(),
            company_name: "YourCompany".to_string(),
            product_name: "YourGame".to_string(),
            product_version: "1.0".to_string(),
        }
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            max_slots: default_max_slots(),
            unit_value: default_unit_value(),
            known_kinds: default_known_kinds(),
        }
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            item_collected: default_item_collected_event(),
            counter_incremented: default_counter_event(),
        }
    }
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            display_value: default_display_command(),
            increment_counter: default_counter_command(),
        }
    }
}
