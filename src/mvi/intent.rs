/// Marker trait for inputs to a reducer.
///
/// Intents come from either side of the bridge: runtime events
/// (an item was collected, the instance finished booting) or user actions
/// (commit the inventory).
pub trait Intent: Send + 'static {}
