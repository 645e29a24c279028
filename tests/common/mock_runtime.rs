//! Scripted stand-in for the browser platform and the runtime instance.

use async_trait::async_trait;
use game_bridge::bridge::{InboundPort, OutboundCommand};
use game_bridge::runtime::{
    HostError, RuntimeAssets, RuntimeHost, RuntimeInstance, SurfaceId,
};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::Notify;

/// Which host step should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Mount,
    Script,
    Instantiate,
}

#[derive(Default)]
pub struct HostLog {
    pub mounted: Vec<String>,
    pub scripts: Vec<String>,
    pub instantiations: Vec<(SurfaceId, RuntimeAssets)>,
    pub unmounted: Vec<SurfaceId>,
}

/// Records every host call and every message sent to the runtime.
///
/// With a gate, instantiation waits until [`FakeHost::release`] is called,
/// which keeps the loader in `Loading` for as long as a test needs.
#[derive(Default)]
pub struct FakeHost {
    log: Mutex<HostLog>,
    messages: Arc<Mutex<Vec<OutboundCommand>>>,
    port: Mutex<Option<InboundPort>>,
    failure: Option<Failure>,
    gate: Option<Arc<Notify>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(failure: Failure) -> Self {
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Notify::new())),
            ..Self::default()
        }
    }

    /// Lets a gated instantiation finish.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn mounted(&self) -> Vec<String> {
        self.log.lock().mounted.clone()
    }

    pub fn scripts(&self) -> Vec<String> {
        self.log.lock().scripts.clone()
    }

    pub fn instantiation_count(&self) -> usize {
        self.log.lock().instantiations.len()
    }

    pub fn instantiated_with(&self) -> Option<RuntimeAssets> {
        self.log
            .lock()
            .instantiations
            .first()
            .map(|(_, assets)| assets.clone())
    }

    pub fn unmounted(&self) -> Vec<SurfaceId> {
        self.log.lock().unmounted.clone()
    }

    pub fn messages(&self) -> Vec<OutboundCommand> {
        self.messages.lock().clone()
    }

    /// The port the runtime received, for raising events "from the game".
    pub fn port(&self) -> InboundPort {
        self.port
            .lock()
            .clone()
            .expect("runtime has not been instantiated")
    }

    fn fail_at(&self, step: Failure) -> Result<(), HostError> {
        if self.failure == Some(step) {
            return Err(HostError::from(format!("{:?} failed", step)));
        }
        Ok(())
    }
}

#[async_trait]
impl RuntimeHost for FakeHost {
    async fn mount_surface(&self, mount_point: &str) -> Result<SurfaceId, HostError> {
        self.fail_at(Failure::Mount)?;
        let mut log = self.log.lock();
        log.mounted.push(mount_point.to_string());
        Ok(SurfaceId(log.mounted.len() as u64))
    }

    async fn inject_loader(&self, script_path: &str) -> Result<(), HostError> {
        self.log.lock().scripts.push(script_path.to_string());
        self.fail_at(Failure::Script)
    }

    async fn instantiate(
        &self,
        surface: SurfaceId,
        assets: &RuntimeAssets,
        inbound: InboundPort,
    ) -> Result<Arc<dyn RuntimeInstance>, HostError> {
        self.log
            .lock()
            .instantiations
            .push((surface, assets.clone()));
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.fail_at(Failure::Instantiate)?;
        *self.port.lock() = Some(inbound);
        Ok(Arc::new(RecordingInstance {
            messages: Arc::clone(&self.messages),
        }))
    }

    async fn unmount_surface(&self, surface: SurfaceId) {
        self.log.lock().unmounted.push(surface);
    }
}

struct RecordingInstance {
    messages: Arc<Mutex<Vec<OutboundCommand>>>,
}

impl RuntimeInstance for RecordingInstance {
    fn send_message(&self, target: &str, method: &str, argument: Option<&str>) {
        self.messages.lock().push(OutboundCommand {
            target: target.to_string(),
            method: method.to_string(),
            argument: argument.map(str::to_string),
        });
    }
}
