//! In-memory vault backend for tests
//!
//! Implements the `VaultClient` trait over a DashMap, with failure
//! injection and assertion helpers. Not-found conditions surface the same
//! typed sentinel as the real client.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use vaultform_client::{ClientError, VaultClient};
use vaultform_entry::Entry;

/// Mock vault that stores entries in memory
pub struct MockVault {
    /// (vault_id, entry_id) -> entry
    entries: DashMap<(String, String), Entry>,
    /// Whether to simulate failures on create
    fail_create: AtomicBool,
    /// Whether to simulate failures on update
    fail_update: AtomicBool,
}

impl MockVault {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Insert an entry directly, assigning an id if it has none. Returns
    /// the entry id. Used to model entries that already exist upstream.
    pub fn seed(&self, mut entry: Entry) -> String {
        if entry.id.is_empty() {
            entry.id = Uuid::new_v4().to_string();
        }
        let id = entry.id.clone();
        self.entries
            .insert((entry.vault_id.clone(), id.clone()), entry);
        id
    }

    /// Fetch a stored entry for assertions
    pub fn entry(&self, vault_id: &str, entry_id: &str) -> Option<Entry> {
        self.entries
            .get(&(vault_id.to_string(), entry_id.to_string()))
            .map(|e| e.value().clone())
    }

    /// Remove an entry behind the provider's back, simulating deletion
    /// through the vault UI
    pub fn remove(&self, vault_id: &str, entry_id: &str) {
        self.entries
            .remove(&(vault_id.to_string(), entry_id.to_string()));
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Configure mock to fail on create operations
    pub fn set_fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    /// Configure mock to fail on update operations
    pub fn set_fail_update(&self, fail: bool) {
        self.fail_update.store(fail, Ordering::SeqCst);
    }

    /// Clear all entries (useful between tests)
    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl Default for MockVault {
    fn default() -> Self {
        Self {
            entries: DashMap::new(),
            fail_create: AtomicBool::new(false),
            fail_update: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl VaultClient for MockVault {
    async fn create_entry(&self, entry: &Entry) -> Result<String, ClientError> {
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(ClientError::api("simulated create failure"));
        }

        let mut created = entry.clone();
        created.id = Uuid::new_v4().to_string();
        let id = created.id.clone();
        self.entries
            .insert((created.vault_id.clone(), id.clone()), created);
        tracing::debug!(entry_id = %id, "MockVault: created entry");
        Ok(id)
    }

    async fn get_entry(&self, vault_id: &str, entry_id: &str) -> Result<Entry, ClientError> {
        self.entries
            .get(&(vault_id.to_string(), entry_id.to_string()))
            .map(|e| e.value().clone())
            .ok_or_else(|| ClientError::not_found(entry_id))
    }

    async fn update_entry(&self, entry: &Entry) -> Result<String, ClientError> {
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(ClientError::api("simulated update failure"));
        }

        let key = (entry.vault_id.clone(), entry.id.clone());
        if !self.entries.contains_key(&key) {
            return Err(ClientError::not_found(&entry.id));
        }
        self.entries.insert(key, entry.clone());
        Ok(entry.id.clone())
    }

    async fn delete_entry(&self, entry: &Entry) -> Result<(), ClientError> {
        let key = (entry.vault_id.clone(), entry.id.clone());
        match self.entries.remove(&key) {
            Some(_) => {
                tracing::debug!(entry_id = %entry.id, "MockVault: deleted entry");
                Ok(())
            }
            None => Err(ClientError::not_found(&entry.id)),
        }
    }
}
