// Verifier Factory - orchestration over the verifier registry
//
// Fronts the registry with the factory surface: uniqueness-checked model
// creation with per-model verifier instance deployment, plus paginated
// reads over the ledger and the per-owner index. The data layer itself
// lives in the verifier-registry crate.

// ================================
// Module Declarations
// ================================

/// Factory configuration
pub mod config;

/// Instance deployment boundary
pub mod deployer;

/// Factory orchestrator
pub mod factory;

// ================================
// Public API Re-exports
// ================================

pub use config::FactoryConfig;
pub use deployer::{DerivedAddressDeployer, InstanceDeployer};
pub use factory::VerifierFactory;

// Re-export the registry's public surface so callers need one crate
pub use verifier_registry::{
    Address, ContentId, Ledger, ModelEntry, ModelSummary, OwnerIndex, RegistryError, Result,
};

use std::sync::Arc;

/// Create a factory with the deterministic derived-address deployer and
/// default configuration
pub fn create_factory(master: Address) -> VerifierFactory {
    let config = FactoryConfig::default();
    let deployer = Arc::new(DerivedAddressDeployer::new(config.deployment_tag.clone()));
    VerifierFactory::new(master, deployer, config)
}
