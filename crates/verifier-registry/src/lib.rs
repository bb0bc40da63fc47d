// Verifier Registry - content-addressed ledger of models and their verifiers
//
// This crate holds the data layer behind the verifier factory: the
// append-mostly ledger of registered models, the derived per-owner index,
// and the core value types. Orchestration (uniqueness-checked creation,
// instance deployment) lives in the verifier-factory crate.

// ================================
// Module Declarations
// ================================

/// Registry error types
pub mod error;

/// Append-mostly ledger of registered models
pub mod ledger;

/// Per-owner secondary index over the ledger
pub mod owner_index;

/// Core value types: content ids, addresses, model entries
pub mod types;

// ================================
// Public API Re-exports
// ================================

pub use error::{RegistryError, Result};
pub use ledger::Ledger;
pub use owner_index::OwnerIndex;
pub use types::{Address, ContentId, ModelEntry, ModelSummary};
