use crate::mvi::ViewState;

/// Embedded runtime load state.
///
/// Transitions only move forward. `Failed` is terminal for the session;
/// a retry means a new session (page reload).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Unloaded,

    /// Surface mounted or loader script in flight; commands are suppressed.
    Loading,

    /// Runtime instantiated, commands are delivered.
    Ready,

    /// Load failed; the bridge runs degraded.
    Failed(String),
}

impl ViewState for LoadState {}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Ready or Failed: no further transition will happen.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Ready | Self::Failed(_))
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unloaded() {
        assert_eq!(LoadState::default(), LoadState::Unloaded);
    }

    #[test]
    fn settled_states() {
        assert!(!LoadState::Unloaded.is_settled());
        assert!(!LoadState::Loading.is_settled());
        assert!(LoadState::Ready.is_settled());
        assert!(LoadState::Failed("boom".to_string()).is_settled());
    }

    #[test]
    fn failure_reason_only_on_failed() {
        assert_eq!(LoadState::Ready.failure_reason(), None);
        assert_eq!(
            LoadState::Failed("no wasm".to_string()).failure_reason(),
            Some("no wasm")
        );
    }
}
