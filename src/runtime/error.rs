use thiserror::Error;

/// Failure reported by a [`RuntimeHost`](super::RuntimeHost) step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct HostError(pub String);

impl From<String> for HostError {
    fn from(reason: String) -> Self {
        HostError(reason)
    }
}

impl From<&str> for HostError {
    fn from(reason: &str) -> Self {
        HostError(reason.to_string())
    }
}

/// Errors that can occur while loading the embedded runtime.
///
/// Every variant leaves the loader in `LoadState::Failed`. None of them is
/// fatal to the host process; the bridge keeps running with commands
/// suppressed.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("Failed to mount rendering surface at '{mount_point}': {source}")]
    SurfaceMount {
        mount_point: String,
        #[source]
        source: HostError,
    },

    #[error("Failed to load runtime loader script '{path}': {source}")]
    ScriptLoad {
        path: String,
        #[source]
        source: HostError,
    },

    #[error("Runtime instantiation rejected: {source}")]
    Instantiate {
        #[source]
        source: HostError,
    },

    /// A previous load already failed; Failed is terminal for the session.
    #[error("Runtime unavailable: {reason}")]
    Failed { reason: String },
}

impl LoadError {
    /// Short message for a degraded-mode banner.
    pub fn user_message(&self) -> &'static str {
        match self {
            LoadError::SurfaceMount { .. } => "The game area could not be created",
            LoadError::ScriptLoad { .. } => "The game failed to download",
            LoadError::Instantiate { .. } => "The game failed to start",
            LoadError::Failed { .. } => "The game is unavailable",
        }
    }
}
