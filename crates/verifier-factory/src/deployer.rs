//! Instance deployment boundary
//!
//! The factory never deploys verifier instances itself; it goes through
//! `InstanceDeployer`, so the deployment policy (derived addresses, a real
//! execution environment, a scripted fake in tests) stays swappable without
//! touching the orchestrator.

use async_trait::async_trait;
use verifier_registry::{Address, ContentId, Result};

// ================================
// Deployer Trait
// ================================

/// Capability that materializes a verifier instance for a content id from
/// the master template. All-or-nothing: either a usable instance address or
/// `DeploymentFailed`, never partial state.
#[async_trait]
pub trait InstanceDeployer: Send + Sync {
    async fn deploy(&self, master: Address, content_id: ContentId) -> Result<Address>;
}

// ================================
// Derived-Address Deployer
// ================================

/// Deterministic deployer: derives the instance address by hashing a
/// namespace tag, the master template address, and the content id.
/// Equal inputs always yield the same address.
pub struct DerivedAddressDeployer {
    tag: String,
}

impl DerivedAddressDeployer {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

#[async_trait]
impl InstanceDeployer for DerivedAddressDeployer {
    async fn deploy(&self, master: Address, content_id: ContentId) -> Result<Address> {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.tag.as_bytes());
        hasher.update(master.as_bytes());
        hasher.update(content_id.as_bytes());
        let digest = hasher.finalize();

        let mut bytes = [0u8; Address::LEN];
        bytes.copy_from_slice(&digest.as_bytes()[..Address::LEN]);
        Ok(Address::from_bytes(bytes))
    }
}
