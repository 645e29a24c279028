use crate::config::CommandTarget;

/// A UI-originated instruction for the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundCommand {
    pub target: String,
    pub method: String,
    pub argument: Option<String>,
}

impl OutboundCommand {
    pub fn new(target: &CommandTarget, argument: Option<String>) -> Self {
        Self {
            target: target.target.clone(),
            method: target.method.clone(),
            argument,
        }
    }
}

/// What happened to an outbound command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Handed to the runtime. Nothing further is known.
    Delivered,
    /// Dropped because the runtime is not ready (loading, failed or
    /// unmounted). Not an error.
    Suppressed,
}

impl CommandOutcome {
    pub fn is_delivered(self) -> bool {
        matches!(self, Self::Delivered)
    }
}
