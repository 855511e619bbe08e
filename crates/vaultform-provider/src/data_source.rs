//! Generic read-only lookup for credential entry data sources

use std::marker::PhantomData;
use std::sync::Arc;

use vaultform_client::VaultClient;

use crate::convert::{model_from_entry, EntryModel};
use crate::error::ProviderError;
use crate::validators::{validate_entry_id, validate_vault_id};

/// Read-only lookup for one credential subtype.
///
/// Unlike a resource refresh, a not-found entry here is an error: the user
/// asked for a specific entry that does not exist.
pub struct EntryDataSource<M: EntryModel> {
    client: Arc<dyn VaultClient>,
    _model: PhantomData<M>,
}

impl<M: EntryModel> EntryDataSource<M> {
    pub fn new(client: Arc<dyn VaultClient>) -> Self {
        Self {
            client,
            _model: PhantomData,
        }
    }

    /// Look up the entry named by the config's `vault_id` and `id`.
    pub async fn read(&self, config: &M) -> Result<M, ProviderError> {
        let common = config.common();
        validate_entry_id(&common.id)?;
        validate_vault_id(&common.vault_id)?;

        let vault_id = common.vault_id.value_or_default();
        let entry_id = common.id.value_or_default();
        tracing::debug!(%vault_id, %entry_id, "reading {}", M::DISPLAY_NAME);

        let entry = self
            .client
            .get_entry(&vault_id, &entry_id)
            .await
            .map_err(|err| ProviderError::client(format!("unable to read {}", M::DISPLAY_NAME), err))?;

        Ok(model_from_entry(&entry))
    }
}
