//! Per-owner secondary index over the ledger
//!
//! Maps each owner to the insertion indexes of its entries, preserving
//! global insertion order within the owner. Maintained in the same critical
//! section as `Ledger::append`; never mutated independently, and always
//! rebuildable from the ledger alone.

use crate::ledger::Ledger;
use crate::types::Address;
use std::collections::HashMap;

/// Owner address -> ordered insertion indexes into the ledger
#[derive(Debug, Default)]
pub struct OwnerIndex {
    by_owner: HashMap<Address, Vec<u64>>,
}

impl OwnerIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly appended ledger entry for `owner`
    pub fn note(&mut self, owner: Address, insertion_index: u64) {
        self.by_owner.entry(owner).or_default().push(insertion_index);
    }

    /// Up to `limit` of the owner's insertion indexes starting at `offset`.
    /// Same pagination semantics as `Ledger::slice`; an unknown owner yields
    /// an empty slice, not an error.
    pub fn slice_by_owner(&self, owner: &Address, offset: u32, limit: u32) -> &[u64] {
        let Some(indexes) = self.by_owner.get(owner) else {
            return &[];
        };
        let start = (offset as usize).min(indexes.len());
        let end = start.saturating_add(limit as usize).min(indexes.len());
        &indexes[start..end]
    }

    pub fn owner_count(&self, owner: &Address) -> u64 {
        self.by_owner.get(owner).map_or(0, |indexes| indexes.len() as u64)
    }

    /// Owners that have at least one entry
    pub fn owners(&self) -> impl Iterator<Item = &Address> {
        self.by_owner.keys()
    }

    /// Reconstruct the index from the ledger alone. Used for recovery and
    /// to cross-check the maintained index in tests.
    pub fn rebuild(ledger: &Ledger) -> Self {
        let mut index = Self::new();
        for (position, entry) in ledger.iter().enumerate() {
            index.note(entry.owner, position as u64);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContentId, ModelEntry};

    fn entry(tag: u8, owner: Address) -> ModelEntry {
        ModelEntry {
            content_id: ContentId::from_content(&[tag]),
            name: format!("model-{tag}"),
            description: String::new(),
            owner,
            verifier_address: Address::from_bytes([tag; 20]),
            registered_at: 0,
        }
    }

    #[test]
    fn test_slice_by_owner_preserves_order() {
        let alice = Address::from_bytes([1; 20]);
        let bob = Address::from_bytes([2; 20]);

        let mut index = OwnerIndex::new();
        index.note(alice, 0);
        index.note(bob, 1);
        index.note(alice, 2);
        index.note(alice, 3);

        assert_eq!(index.slice_by_owner(&alice, 0, 10), &[0, 2, 3]);
        assert_eq!(index.slice_by_owner(&alice, 1, 1), &[2]);
        assert_eq!(index.slice_by_owner(&bob, 0, 10), &[1]);
        assert_eq!(index.owner_count(&alice), 3);
    }

    #[test]
    fn test_unknown_owner_yields_empty() {
        let index = OwnerIndex::new();
        let stranger = Address::from_bytes([9; 20]);

        assert!(index.slice_by_owner(&stranger, 0, 10).is_empty());
        assert_eq!(index.owner_count(&stranger), 0);
    }

    #[test]
    fn test_rebuild_matches_maintained_index() {
        let alice = Address::from_bytes([1; 20]);
        let bob = Address::from_bytes([2; 20]);

        let mut ledger = Ledger::new();
        let mut maintained = OwnerIndex::new();
        for (tag, owner) in [(1, alice), (2, bob), (3, alice), (4, bob), (5, alice)] {
            let position = ledger.append(entry(tag, owner)).unwrap();
            maintained.note(owner, position);
        }

        let rebuilt = OwnerIndex::rebuild(&ledger);
        for owner in [&alice, &bob] {
            assert_eq!(
                rebuilt.slice_by_owner(owner, 0, u32::MAX),
                maintained.slice_by_owner(owner, 0, u32::MAX),
            );
        }
    }
}
