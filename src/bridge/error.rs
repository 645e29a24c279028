use thiserror::Error;

/// Problems with an inbound event. None of them is fatal; offending events
/// are quarantined and the bridge keeps running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    #[error("Unknown inbound event '{name}'")]
    UnknownEvent { name: String },

    #[error("Inbound event '{name}' requires a payload")]
    MissingPayload { name: String },

    #[error("Unknown item kind '{kind}'")]
    UnknownItemKind { kind: String },

    #[error("Invalid item kind '{raw}': {reason}")]
    InvalidItemKind { raw: String, reason: &'static str },
}
