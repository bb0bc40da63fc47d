//! Append-mostly ledger of registered models
//!
//! Insertion order is registration order and is the canonical order for
//! unfiltered pagination. Entries are never mutated or removed.

use crate::error::{RegistryError, Result};
use crate::types::{ContentId, ModelEntry};
use std::collections::HashMap;

/// Ordered store of model entries, keyed by content id
#[derive(Debug, Default)]
pub struct Ledger {
    /// Entries in insertion order
    entries: Vec<ModelEntry>,
    /// Content id -> insertion index
    positions: HashMap<ContentId, usize>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, assigning it the next insertion index.
    ///
    /// Fails with `DuplicateContentId` if the content id is already
    /// registered, leaving the ledger unchanged.
    pub fn append(&mut self, entry: ModelEntry) -> Result<u64> {
        let content_id = entry.content_id;
        if self.positions.contains_key(&content_id) {
            return Err(RegistryError::DuplicateContentId(content_id.to_hex()));
        }

        let index = self.entries.len();
        self.positions.insert(content_id, index);
        self.entries.push(entry);

        Ok(index as u64)
    }

    /// Look up an entry by content id
    pub fn get(&self, content_id: &ContentId) -> Result<&ModelEntry> {
        self.positions
            .get(content_id)
            .map(|&index| &self.entries[index])
            .ok_or_else(|| RegistryError::NotFound(content_id.to_hex()))
    }

    pub fn contains(&self, content_id: &ContentId) -> bool {
        self.positions.contains_key(content_id)
    }

    /// Entry at a given insertion index
    pub fn entry_at(&self, index: u64) -> Option<&ModelEntry> {
        self.entries.get(index as usize)
    }

    /// Up to `limit` entries starting at insertion index `offset`, in
    /// insertion order. An offset past the end yields an empty slice, not
    /// an error; so does `limit == 0`.
    pub fn slice(&self, offset: u32, limit: u32) -> &[ModelEntry] {
        let start = (offset as usize).min(self.entries.len());
        let end = start
            .saturating_add(limit as usize)
            .min(self.entries.len());
        &self.entries[start..end]
    }

    pub fn len(&self) -> u64 {
        self.entries.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &ModelEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Address;

    fn entry(tag: u8, owner: u8) -> ModelEntry {
        ModelEntry {
            content_id: ContentId::from_content(&[tag]),
            name: format!("model-{tag}"),
            description: String::new(),
            owner: Address::from_bytes([owner; 20]),
            verifier_address: Address::from_bytes([tag; 20]),
            registered_at: 0,
        }
    }

    #[test]
    fn test_append_assigns_insertion_order() {
        let mut ledger = Ledger::new();

        assert_eq!(ledger.append(entry(1, 1)).unwrap(), 0);
        assert_eq!(ledger.append(entry(2, 1)).unwrap(), 1);
        assert_eq!(ledger.append(entry(3, 2)).unwrap(), 2);
        assert_eq!(ledger.len(), 3);

        let names: Vec<_> = ledger.iter().map(|e| e.name.clone()).collect();
        assert_eq!(names, vec!["model-1", "model-2", "model-3"]);
    }

    #[test]
    fn test_append_rejects_duplicate() {
        let mut ledger = Ledger::new();
        ledger.append(entry(1, 1)).unwrap();

        let duplicate = entry(1, 2);
        let expected_id = duplicate.content_id;
        let err = ledger.append(duplicate).unwrap_err();

        assert_eq!(
            err,
            RegistryError::DuplicateContentId(expected_id.to_hex())
        );
        // Ledger is untouched by the failed append
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get(&expected_id).unwrap().owner, Address::from_bytes([1; 20]));
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let ledger = Ledger::new();
        let missing = ContentId::from_content(b"missing");

        assert_eq!(
            ledger.get(&missing).unwrap_err(),
            RegistryError::NotFound(missing.to_hex())
        );
    }

    #[test]
    fn test_slice_bounds() {
        let mut ledger = Ledger::new();
        for tag in 0..5 {
            ledger.append(entry(tag, 1)).unwrap();
        }

        assert_eq!(ledger.slice(0, 3).len(), 3);
        assert_eq!(ledger.slice(3, 10).len(), 2);
        assert_eq!(ledger.slice(5, 10).len(), 0);
        assert_eq!(ledger.slice(u32::MAX, u32::MAX).len(), 0);
        assert_eq!(ledger.slice(2, 0).len(), 0);
    }
}
