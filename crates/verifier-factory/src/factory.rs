//! Verifier factory orchestrator
//!
//! Composes the ledger, the owner index, and the instance deployer behind
//! the five-operation factory surface. Mutation runs under a single-writer
//! discipline: one write lock spans "check absent, deploy, append to both
//! indexes", so two creators can never both observe a content id as free,
//! and readers never see a half-applied registration.

use crate::config::FactoryConfig;
use crate::deployer::InstanceDeployer;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use verifier_registry::{
    Address, ContentId, Ledger, ModelEntry, ModelSummary, OwnerIndex, RegistryError, Result,
};

/// Ledger and owner index, advanced together inside the write lock
#[derive(Default)]
struct RegistryState {
    ledger: Ledger,
    owner_index: OwnerIndex,
}

/// Content-addressed verifier registry with per-model clone materialization
pub struct VerifierFactory {
    /// Master template every instance is derived from; fixed at construction
    master: Address,
    deployer: Arc<dyn InstanceDeployer>,
    config: FactoryConfig,
    state: RwLock<RegistryState>,
}

impl VerifierFactory {
    pub fn new(
        master: Address,
        deployer: Arc<dyn InstanceDeployer>,
        config: FactoryConfig,
    ) -> Self {
        Self {
            master,
            deployer,
            config,
            state: RwLock::new(RegistryState::default()),
        }
    }

    /// Register a model and materialize its verifier instance.
    ///
    /// `caller` is the registering identity supplied by the embedding
    /// layer; it becomes the entry's owner. Fails with `DuplicateContentId`
    /// if the id is already registered (no deployment is attempted) or
    /// `DeploymentFailed` if the deployer errors (no entry is recorded).
    /// Returns the instance address on success.
    pub async fn create_child_contract(
        &self,
        caller: Address,
        content_id: ContentId,
        name: &str,
        description: &str,
    ) -> Result<Address> {
        if name.is_empty() {
            return Err(RegistryError::EmptyModelName);
        }

        let mut state = self.state.write().await;
        if state.ledger.contains(&content_id) {
            debug!(content_id = %content_id, "create rejected, already registered");
            return Err(RegistryError::DuplicateContentId(content_id.to_hex()));
        }

        // Deployment stays inside the write lock: no other creator may
        // observe this content id as absent while the deploy is in flight.
        let instance = self.deployer.deploy(self.master, content_id).await?;

        let entry = ModelEntry {
            content_id,
            name: name.to_string(),
            description: description.to_string(),
            owner: caller,
            verifier_address: instance,
            registered_at: chrono::Utc::now().timestamp(),
        };
        let position = state.ledger.append(entry)?;
        state.owner_index.note(caller, position);

        info!(
            content_id = %content_id,
            instance = %instance,
            owner = %caller,
            "model registered"
        );
        Ok(instance)
    }

    /// Verifier instance address for a registered content id
    pub async fn get_cloned_verifier_contract(&self, content_id: ContentId) -> Result<Address> {
        let state = self.state.read().await;
        state.ledger.get(&content_id).map(|entry| entry.verifier_address)
    }

    /// The master template address. Fixed for the factory's lifetime.
    pub fn get_master_verifier_contract(&self) -> Address {
        self.master
    }

    /// Registered models in registration order, projected to summaries.
    /// The effective limit is capped by `FactoryConfig::max_page_limit`.
    pub async fn get_models(&self, offset: u32, limit: u32) -> Vec<ModelSummary> {
        let limit = limit.min(self.config.max_page_limit);
        let state = self.state.read().await;
        state
            .ledger
            .slice(offset, limit)
            .iter()
            .map(ModelSummary::from)
            .collect()
    }

    /// Registered models of one owner, in registration order
    pub async fn get_models_by_owner_address(
        &self,
        owner: Address,
        offset: u32,
        limit: u32,
    ) -> Vec<ModelSummary> {
        let limit = limit.min(self.config.max_page_limit);
        let state = self.state.read().await;
        state
            .owner_index
            .slice_by_owner(&owner, offset, limit)
            .iter()
            .filter_map(|&position| state.ledger.entry_at(position))
            .map(ModelSummary::from)
            .collect()
    }

    /// Full entry for a content id, including the description that list
    /// output omits
    pub async fn get_model(&self, content_id: ContentId) -> Result<ModelEntry> {
        let state = self.state.read().await;
        state.ledger.get(&content_id).cloned()
    }

    pub async fn model_count(&self) -> u64 {
        self.state.read().await.ledger.len()
    }

    pub async fn model_count_by_owner(&self, owner: Address) -> u64 {
        self.state.read().await.owner_index.owner_count(&owner)
    }
}
