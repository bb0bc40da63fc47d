use serde::{Deserialize, Serialize};
use std::fmt;

// ================================
// Content Identifiers
// ================================

/// Content-addressed model identifier: a 32-byte hash over the model's
/// content. The registry's primary key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContentId(#[serde(with = "hex_array")] [u8; 32]);

impl ContentId {
    pub const LEN: usize = 32;

    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Compute a content id by hashing raw model content
    pub fn from_content(content: &[u8]) -> Self {
        Self(blake3::hash(content).into())
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentId({})", self.to_hex())
    }
}

// ================================
// Addresses
// ================================

/// Opaque 20-byte account address. Used for both verifier instances and
/// registering owners.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address(#[serde(with = "hex_array")] [u8; 20]);

impl Address {
    pub const LEN: usize = 20;

    /// The all-zero address. Never a valid instance address.
    pub const ZERO: Address = Address([0u8; 20]);

    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(0x{})", hex::encode(self.0))
    }
}

// ================================
// Model Entries
// ================================

/// A registered model. Created exactly once at registration and immutable
/// thereafter; the ledger owns every entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Content-addressed identifier of the model
    pub content_id: ContentId,
    /// Human-readable model name
    pub name: String,
    /// Human-readable model description
    pub description: String,
    /// Identity that registered the model
    pub owner: Address,
    /// Deployed verifier instance for this model
    pub verifier_address: Address,
    /// Registration timestamp (unix seconds)
    pub registered_at: i64,
}

/// List projection of a model entry. The description is omitted from list
/// output on purpose; fetch the full entry for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub content_id: ContentId,
    pub name: String,
    pub verifier_address: Address,
}

impl From<&ModelEntry> for ModelSummary {
    fn from(entry: &ModelEntry) -> Self {
        Self {
            content_id: entry.content_id,
            name: entry.name.clone(),
            verifier_address: entry.verifier_address,
        }
    }
}

// Custom serde implementation for fixed-size byte arrays as hex strings
mod hex_array {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S, const N: usize>(data: &[u8; N], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(data))
    }

    pub fn deserialize<'de, D, const N: usize>(deserializer: D) -> Result<[u8; N], D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        let bytes = hex::decode(&text).map_err(serde::de::Error::custom)?;
        let len = bytes.len();
        bytes.try_into().map_err(|_| {
            serde::de::Error::custom(format!("Expected {} bytes, got {}", N, len))
        })
    }
}
