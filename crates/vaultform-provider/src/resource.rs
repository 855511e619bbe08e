//! Generic CRUD orchestrator for credential entry resources
//!
//! One `EntryResource<M>` instance serves one resource type. The driving
//! framework serializes operations per resource instance; this layer holds
//! no state of its own beyond the injected client handle.

use std::marker::PhantomData;
use std::sync::Arc;

use vaultform_client::VaultClient;

use crate::convert::{model_from_entry, to_entry, EntryModel, Payload};
use crate::error::ProviderError;
use crate::validators::parse_entry_import_id;
use crate::value::Value;

/// Outcome of a refresh: either a synced model or the discovery that the
/// entry was deleted upstream and local state should be dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome<M> {
    Synced(M),
    Removed,
}

/// CRUD orchestrator for one credential subtype.
pub struct EntryResource<M: EntryModel> {
    client: Arc<dyn VaultClient>,
    _model: PhantomData<M>,
}

impl<M: EntryModel> EntryResource<M> {
    pub fn new(client: Arc<dyn VaultClient>) -> Self {
        Self {
            client,
            _model: PhantomData,
        }
    }

    /// Create the entry, then re-fetch it by its new id.
    ///
    /// The create call only returns the id; the full enriched record comes
    /// from the follow-up get.
    pub async fn create(&self, plan: &M) -> Result<M, ProviderError> {
        let entry = to_entry(plan);
        tracing::debug!(vault_id = %entry.vault_id, name = %entry.name, "creating {}", M::DISPLAY_NAME);

        let entry_id = self
            .client
            .create_entry(&entry)
            .await
            .map_err(|err| ProviderError::client(format!("unable to create {}", M::DISPLAY_NAME), err))?;

        let created = self
            .client
            .get_entry(&entry.vault_id, &entry_id)
            .await
            .map_err(|err| {
                ProviderError::client(format!("unable to fetch created {}", M::DISPLAY_NAME), err)
            })?;

        Ok(model_from_entry(&created))
    }

    /// Refresh from the vault. A not-found outcome means the entry was
    /// deleted upstream; the caller drops local state without error.
    pub async fn read(&self, state: &M) -> Result<ReadOutcome<M>, ProviderError> {
        let entry = to_entry(state);

        match self.client.get_entry(&entry.vault_id, &entry.id).await {
            Ok(entry) => Ok(ReadOutcome::Synced(model_from_entry(&entry))),
            Err(err) if err.is_not_found() => {
                tracing::debug!(entry_id = %entry.id, "{} gone upstream, removing state", M::DISPLAY_NAME);
                Ok(ReadOutcome::Removed)
            }
            Err(err) => Err(ProviderError::client(
                format!("unable to read {}", M::DISPLAY_NAME),
                err,
            )),
        }
    }

    /// Update the entry in place. The entry and vault ids are never
    /// mutated here; the planning layer forces replacement on vault_id
    /// changes. State is written from the plan, without a re-fetch.
    pub async fn update(&self, plan: &M) -> Result<M, ProviderError> {
        let entry = to_entry(plan);
        tracing::debug!(entry_id = %entry.id, "updating {}", M::DISPLAY_NAME);

        self.client
            .update_entry(&entry)
            .await
            .map_err(|err| ProviderError::client(format!("unable to update {}", M::DISPLAY_NAME), err))?;

        Ok(plan.clone())
    }

    /// Delete the entry. Already-gone is success.
    pub async fn delete(&self, state: &M) -> Result<(), ProviderError> {
        let entry = to_entry(state);
        tracing::debug!(entry_id = %entry.id, "deleting {}", M::DISPLAY_NAME);

        match self.client.delete_entry(&entry).await {
            Ok(()) => Ok(()),
            Err(err) if err.is_not_found() => Ok(()),
            Err(err) => Err(ProviderError::client(
                format!("unable to delete {}", M::DISPLAY_NAME),
                err,
            )),
        }
    }

    /// Import an existing entry from a `<vault_id>/<entry_id>` token.
    ///
    /// The entry is fetched and its type/subtype tags checked against this
    /// resource's subtype before the import is accepted; importing, say, an
    /// SSH key entry into a username/password resource fails here instead
    /// of producing a half-empty state on the first refresh.
    pub async fn import(&self, token: &str) -> Result<M, ProviderError> {
        let (vault_id, entry_id) = parse_entry_import_id(token)?;

        let entry = self
            .client
            .get_entry(&vault_id, &entry_id)
            .await
            .map_err(|err| ProviderError::client("unable to read entry", err))?;

        if !entry.is_sub_type(M::Payload::SUB_TYPE) {
            return Err(ProviderError::TypeMismatch {
                expected: M::Payload::SUB_TYPE,
                actual_type: entry.entry_type,
                actual_sub_type: entry.sub_type,
            });
        }

        // Only the identifying attributes are imported; the first refresh
        // fills in the rest.
        let mut model = M::default();
        model.common_mut().vault_id = Value::known(vault_id);
        model.common_mut().id = Value::known(entry_id);
        Ok(model)
    }
}
