use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

use super::error::BridgeError;
use super::event::InboundEvent;

const QUARANTINE_CAPACITY: usize = 32;

/// An inbound event that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarantinedEvent {
    pub event: InboundEvent,
    pub error: BridgeError,
}

/// Bounded holding area for rejected inbound events; oldest evicted first.
#[derive(Clone, Default)]
pub struct Quarantine {
    inner: Arc<Mutex<QuarantineInner>>,
}

#[derive(Default)]
struct QuarantineInner {
    recent: VecDeque<QuarantinedEvent>,
    total: u64,
}

impl Quarantine {
    pub fn admit(&self, event: InboundEvent, error: BridgeError) {
        tracing::warn!(
            event = %event.name,
            payload = ?event.payload,
            error = %error,
            "Inbound event quarantined"
        );
        let mut inner = self.inner.lock();
        if inner.recent.len() == QUARANTINE_CAPACITY {
            inner.recent.pop_front();
        }
        inner.recent.push_back(QuarantinedEvent { event, error });
        inner.total += 1;
    }

    /// Most recent rejections, oldest first.
    pub fn recent(&self) -> Vec<QuarantinedEvent> {
        self.inner.lock().recent.iter().cloned().collect()
    }

    /// Rejections since the session started, including evicted ones.
    pub fn total(&self) -> u64 {
        self.inner.lock().total
    }
}
