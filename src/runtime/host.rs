use async_trait::async_trait;
use std::sync::Arc;

use crate::bridge::InboundPort;
use crate::config::RuntimeAssets;

use super::error::HostError;
use super::handle::RuntimeInstance;

/// Identifier of a rendering surface created by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

/// The platform the runtime is embedded in.
///
/// A browser host inserts a canvas into the mount element, appends the
/// loader `<script>` and calls the runtime's instantiation entry point.
/// The loader calls each step at most once per session, in order.
#[async_trait]
pub trait RuntimeHost: Send + Sync {
    /// Inserts a rendering surface into the region named `mount_point`.
    async fn mount_surface(&self, mount_point: &str) -> Result<SurfaceId, HostError>;

    /// Injects the loader script and resolves once it has executed.
    async fn inject_loader(&self, script_path: &str) -> Result<(), HostError>;

    /// Runs the runtime's instantiation entry point against `surface`.
    ///
    /// `inbound` is the only way the runtime may call back into the UI.
    async fn instantiate(
        &self,
        surface: SurfaceId,
        assets: &RuntimeAssets,
        inbound: InboundPort,
    ) -> Result<Arc<dyn RuntimeInstance>, HostError>;

    /// Removes the surface (and any script the host injected for it).
    ///
    /// Default implementation does nothing.
    async fn unmount_surface(&self, _surface: SurfaceId) {}
}
