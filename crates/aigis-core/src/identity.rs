//! # Register Identity Newtypes
//!
//! Newtype wrappers for the identifiers that flow through the engine.
//! These prevent accidental identifier confusion — you cannot pass a
//! `VendorId` where a `SystemId` is expected, and an oversight owner
//! can never be mistaken for the system it oversees.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a registered AI system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SystemId(pub Uuid);

/// Unique identifier for an upstream vendor / provider record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VendorId(pub Uuid);

/// Unique identifier for an organization member (oversight owner,
/// task assignee).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberId(pub Uuid);

impl SystemId {
    /// Generate a new random system identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl VendorId {
    /// Generate a new random vendor identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl MemberId {
    /// Generate a new random member identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SystemId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for VendorId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for MemberId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SystemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "system:{}", self.0)
    }
}

impl std::fmt::Display for VendorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "vendor:{}", self.0)
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "member:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(SystemId::new(), SystemId::new());
        assert_ne!(VendorId::new(), VendorId::new());
        assert_ne!(MemberId::new(), MemberId::new());
    }

    #[test]
    fn test_display_prefixes() {
        let sid = SystemId::new();
        let vid = VendorId::new();
        let mid = MemberId::new();
        assert!(sid.to_string().starts_with("system:"));
        assert!(vid.to_string().starts_with("vendor:"));
        assert!(mid.to_string().starts_with("member:"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let sid = SystemId::new();
        let json = serde_json::to_string(&sid).unwrap();
        let parsed: SystemId = serde_json::from_str(&json).unwrap();
        assert_eq!(sid, parsed);
    }
}
