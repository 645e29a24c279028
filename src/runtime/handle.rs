use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// A running runtime instance, as seen from the UI side.
///
/// Calls are fire-and-forget: nothing is returned or awaited, and whatever
/// the runtime does with the message is opaque to the bridge.
pub trait RuntimeInstance: Send + Sync {
    fn send_message(&self, target: &str, method: &str, argument: Option<&str>);
}

/// Owned reference to the initialized runtime.
#[derive(Clone)]
pub struct RuntimeHandle {
    instance: Arc<dyn RuntimeInstance>,
}

impl RuntimeHandle {
    pub fn new(instance: Arc<dyn RuntimeInstance>) -> Self {
        Self { instance }
    }

    pub fn send_message(&self, target: &str, method: &str, argument: Option<&str>) {
        self.instance.send_message(target, method, argument);
    }
}

impl fmt::Debug for RuntimeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeHandle").finish_non_exhaustive()
    }
}

/// Shared cell holding the handle once the runtime is ready.
///
/// Created by the session and injected into both the loader (the only
/// writer) and the event bridge (reader). Empty before load completes,
/// after a failed load, and after unmount.
#[derive(Clone, Default)]
pub struct RuntimeSlot {
    inner: Arc<RwLock<Option<RuntimeHandle>>>,
}

impl RuntimeSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<RuntimeHandle> {
        self.inner.read().clone()
    }

    pub fn is_present(&self) -> bool {
        self.inner.read().is_some()
    }

    /// Stores the handle unless one is already present.
    pub(crate) fn fill(&self, handle: RuntimeHandle) -> bool {
        let mut slot = self.inner.write();
        if slot.is_some() {
            return false;
        }
        *slot = Some(handle);
        true
    }

    pub(crate) fn clear(&self) {
        *self.inner.write() = None;
    }
}
