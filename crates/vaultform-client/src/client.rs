//! Vault client abstraction
//!
//! This trait allows the provider layer to work against different vault
//! backends: the HTTP client for production, an in-memory mock for testing.

use async_trait::async_trait;

use vaultform_entry::Entry;

use crate::error::ClientError;

/// Trait for vault credential-entry backends
///
/// All operations are scoped to a single entry; the caller is responsible
/// for serializing operations on one logical entry. Implementations own
/// transport concerns (timeouts, TLS, auth refresh); this layer performs
/// no retries.
#[async_trait]
pub trait VaultClient: Send + Sync {
    /// Create a new entry in its vault
    ///
    /// # Returns
    /// The server-assigned entry id. The created entry must be re-fetched
    /// with [`get_entry`](Self::get_entry) to observe server-side defaults.
    async fn create_entry(&self, entry: &Entry) -> Result<String, ClientError>;

    /// Fetch an entry by vault id and entry id
    async fn get_entry(&self, vault_id: &str, entry_id: &str) -> Result<Entry, ClientError>;

    /// Update an existing entry in place
    ///
    /// `id` and `vault_id` select the entry and are never changed by an
    /// update.
    ///
    /// # Returns
    /// The id of the saved entry.
    async fn update_entry(&self, entry: &Entry) -> Result<String, ClientError>;

    /// Delete an entry
    ///
    /// Returns [`ClientError::NotFound`] if the entry is already gone.
    async fn delete_entry(&self, entry: &Entry) -> Result<(), ClientError>;
}
