/// Marker trait for state that views observe.
///
/// States are cloned into snapshots for observers and compared to decide
/// whether a change needs to be published.
pub trait ViewState: Clone + PartialEq + Default + Send + Sync + 'static {}
