//! UUID-based identifiers for stored field definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a stored datetime field definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(Uuid);

impl FieldId {
    /// Creates a new time-ordered (UUIDv7) identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Wraps an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Creates an identifier from its 16 raw bytes.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Hyphenated lowercase, e.g. 01890a5d-ac96-774b-bcce-b302099a8057
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for FieldId {
    type Err = uuid::Error;

    /// Accepts hyphenated or simple (32 hex chars) form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let id: FieldId = "01890a5d-ac96-774b-bcce-b302099a8057".parse().unwrap();
        assert_eq!(id.to_string(), "01890a5d-ac96-774b-bcce-b302099a8057");

        let simple: FieldId = "01890a5dac96774bbcceb302099a8057".parse().unwrap();
        assert_eq!(id, simple);
    }

    #[test]
    fn test_new_ids_are_v7() {
        let id = FieldId::new();
        assert_eq!(id.as_uuid().get_version_num(), 7);
        assert_ne!(id, FieldId::new());
    }

    #[test]
    fn test_invalid_id() {
        assert!("not-a-uuid".parse::<FieldId>().is_err());
    }
}
