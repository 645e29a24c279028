use serde::Serialize;
use std::fmt;

use crate::bridge::BridgeError;
use crate::config::InventoryConfig;

/// Identifier of a collectible item, e.g. `pear`.
///
/// Always trimmed, lowercase ASCII, non-empty, and limited to letters,
/// digits, `-` and `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemKind(String);

impl ItemKind {
    pub fn parse(raw: &str) -> Result<Self, BridgeError> {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(BridgeError::InvalidItemKind {
                raw: raw.to_string(),
                reason: "empty",
            });
        }
        if !normalized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(BridgeError::InvalidItemKind {
                raw: raw.to_string(),
                reason: "only letters, digits, '-' and '_' are allowed",
            });
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The item kinds the runtime is allowed to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownKinds {
    kinds: Vec<ItemKind>,
}

impl KnownKinds {
    pub fn new(kinds: Vec<ItemKind>) -> Self {
        let mut unique: Vec<ItemKind> = Vec::with_capacity(kinds.len());
        for kind in kinds {
            if !unique.contains(&kind) {
                unique.push(kind);
            }
        }
        Self { kinds: unique }
    }

    pub fn from_names(names: &[String]) -> Result<Self, BridgeError> {
        let kinds = names
            .iter()
            .map(|name| ItemKind::parse(name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(kinds))
    }

    /// Validates a runtime payload. Unknown kinds are rejected, never
    /// added as new inventory keys.
    pub fn resolve(&self, raw: &str) -> Result<ItemKind, BridgeError> {
        let kind = ItemKind::parse(raw)?;
        if self.contains(&kind) {
            Ok(kind)
        } else {
            Err(BridgeError::UnknownItemKind {
                kind: kind.as_str().to_string(),
            })
        }
    }

    pub fn contains(&self, kind: &ItemKind) -> bool {
        self.kinds.contains(kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemKind> {
        self.kinds.iter()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Default for KnownKinds {
    /// The kinds named by the default `[inventory]` config section.
    fn default() -> Self {
        Self::new(
            InventoryConfig::default()
                .known_kinds
                .iter()
                .filter_map(|name| ItemKind::parse(name).ok())
                .collect(),
        )
    }
}
