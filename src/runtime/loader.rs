//! One-shot asynchronous runtime loading.

use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::bridge::InboundPort;
use crate::config::RuntimeAssets;
use crate::mvi::Reducer;

use super::error::LoadError;
use super::handle::{RuntimeHandle, RuntimeSlot};
use super::host::{RuntimeHost, SurfaceId};
use super::lifecycle::{LoadIntent, LoadReducer, LoadState};

/// Boots the embedded runtime at most once per session.
///
/// The first [`load`](Self::load) mounts the surface, injects the loader
/// script and instantiates the runtime. Calls made while that is in flight
/// wait for it; calls after it settled replay the outcome.
pub struct RuntimeLoader {
    host: Arc<dyn RuntimeHost>,
    mount_point: String,
    slot: RuntimeSlot,
    inbound: InboundPort,
    state: watch::Sender<LoadState>,
    surface: Mutex<Option<SurfaceId>>,
}

impl RuntimeLoader {
    pub fn new(
        host: Arc<dyn RuntimeHost>,
        mount_point: impl Into<String>,
        slot: RuntimeSlot,
        inbound: InboundPort,
    ) -> Self {
        let (state, _) = watch::channel(LoadState::default());
        Self {
            host,
            mount_point: mount_point.into(),
            slot,
            inbound,
            state,
            surface: Mutex::new(None),
        }
    }

    pub fn state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every load state transition.
    pub fn watch_state(&self) -> watch::Receiver<LoadState> {
        self.state.subscribe()
    }

    /// The handle, once the runtime is ready.
    pub fn handle(&self) -> Option<RuntimeHandle> {
        self.slot.get()
    }

    /// Surface created by this loader, if mounting got that far.
    pub fn surface(&self) -> Option<SurfaceId> {
        *self.surface.lock()
    }

    /// Loads the runtime, or joins / replays the load already started.
    ///
    /// If the leading call is dropped before the load settles (its task
    /// aborted on unmount), the state moves to `Failed` so waiters wake.
    pub async fn load(&self, assets: &RuntimeAssets) -> Result<RuntimeHandle, LoadError> {
        if self.transition(LoadIntent::Begin).is_none() {
            return self.settled_outcome().await;
        }
        let guard = LoadGuard::new(self);

        tracing::info!(
            mount_point = %self.mount_point,
            product = %assets.product_name,
            version = %assets.product_version,
            "Loading embedded runtime"
        );

        let outcome = self.boot(assets).await;
        guard.complete();

        match outcome {
            Ok(handle) => {
                // Fill before publishing Ready so waiters always find the handle.
                self.slot.fill(handle.clone());
                self.transition(LoadIntent::Instantiated);
                tracing::info!(mount_point = %self.mount_point, "Embedded runtime ready");
                Ok(handle)
            }
            Err(err) => {
                tracing::error!(error = %err, "Embedded runtime failed to load");
                self.transition(LoadIntent::Rejected {
                    reason: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Starts [`load`](Self::load) on a background task.
    ///
    /// A failure is logged and leaves the bridge in degraded mode; it never
    /// reaches the caller.
    pub fn spawn(self: &Arc<Self>, assets: RuntimeAssets) -> JoinHandle<()> {
        let loader = Arc::clone(self);
        tokio::spawn(async move {
            if let Err(err) = loader.load(&assets).await {
                tracing::warn!(
                    reason = err.user_message(),
                    "Runtime unavailable; outbound commands will be suppressed"
                );
            }
        })
    }

    /// Resolves once the state is Ready or Failed.
    ///
    /// Never resolves for a load that stalls; there is no timeout.
    pub async fn wait_settled(&self) -> LoadState {
        let mut rx = self.state.subscribe();
        let settled = match rx.wait_for(LoadState::is_settled).await {
            Ok(state) => state.clone(),
            // The sender lives in `self`, so this only happens mid-drop.
            Err(_) => self.state(),
        };
        settled
    }

    async fn boot(&self, assets: &RuntimeAssets) -> Result<RuntimeHandle, LoadError> {
        let surface = self
            .host
            .mount_surface(&self.mount_point)
            .await
            .map_err(|source| LoadError::SurfaceMount {
                mount_point: self.mount_point.clone(),
                source,
            })?;
        *self.surface.lock() = Some(surface);
        tracing::debug!(?surface, "Rendering surface mounted");

        self.host
            .inject_loader(&assets.loader_script_path)
            .await
            .map_err(|source| LoadError::ScriptLoad {
                path: assets.loader_script_path.clone(),
                source,
            })?;
        tracing::debug!(script = %assets.loader_script_path, "Loader script executed");

        let instance = self
            .host
            .instantiate(surface, assets, self.inbound.clone())
            .await
            .map_err(|source| LoadError::Instantiate { source })?;

        Ok(RuntimeHandle::new(instance))
    }

    async fn settled_outcome(&self) -> Result<RuntimeHandle, LoadError> {
        match self.wait_settled().await {
            LoadState::Ready => self.slot.get().ok_or_else(|| LoadError::Failed {
                reason: "runtime was unmounted".to_string(),
            }),
            LoadState::Failed(reason) => Err(LoadError::Failed { reason }),
            other => Err(LoadError::Failed {
                reason: format!("load did not settle (state: {:?})", other),
            }),
        }
    }

    /// Applies `intent`; returns the new state only if it changed.
    ///
    /// The reducer runs under the watch channel's lock, so two concurrent
    /// `Begin`s cannot both observe `Unloaded`.
    fn transition(&self, intent: LoadIntent) -> Option<LoadState> {
        let mut next = None;
        self.state.send_if_modified(|state| {
            let previous = state.clone();
            *state = LoadReducer::reduce(std::mem::take(state), intent);
            if *state == previous {
                return false;
            }
            next = Some(state.clone());
            true
        });
        next
    }
}

/// Failure reason recorded when a load is abandoned by unmount.
pub const UNMOUNTED_REASON: &str = "runtime unmounted before it finished loading";

/// Settles the machine if the leading `load` future is dropped mid-boot.
struct LoadGuard<'a> {
    loader: &'a RuntimeLoader,
    completed: bool,
}

impl<'a> LoadGuard<'a> {
    fn new(loader: &'a RuntimeLoader) -> Self {
        Self {
            loader,
            completed: false,
        }
    }

    fn complete(mut self) {
        self.completed = true;
    }
}

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        if self.completed {
            return;
        }
        tracing::warn!(
            mount_point = %self.loader.mount_point,
            "Runtime load cancelled before it settled"
        );
        self.loader.transition(LoadIntent::Rejected {
            reason: UNMOUNTED_REASON.to_string(),
        });
    }
}
