//! Provider registry
//!
//! Builds the vault client once from configuration and hands an owned
//! handle to every orchestrator it creates. There is no post-construction
//! configure step; a [`Provider`] without a working client cannot exist.

use std::sync::Arc;

use vaultform_client::{ClientConfig, HttpVaultClient, VaultClient};

use crate::convert::EntryModel;
use crate::data_source::EntryDataSource;
use crate::entries;
use crate::resource::EntryResource;
use crate::schema::Schema;

/// Prefix for every resource and data-source type name.
pub const PROVIDER_TYPE_NAME: &str = "vaultform";

/// A registered resource or data-source type: its full name and schema.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    pub type_name: String,
    pub schema: Schema,
}

fn descriptor<M: EntryModel>(schema: Schema) -> TypeDescriptor {
    TypeDescriptor {
        type_name: format!("{}_{}", PROVIDER_TYPE_NAME, M::TYPE_SUFFIX),
        schema,
    }
}

/// The provider: one vault client shared by all orchestrators.
pub struct Provider {
    client: Arc<dyn VaultClient>,
}

impl Provider {
    /// Build a provider with an HTTP client from configuration.
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            client: Arc::new(HttpVaultClient::new(config)),
        })
    }

    /// Build a provider around an existing client. Tests inject a mock
    /// vault this way.
    pub fn with_client(client: Arc<dyn VaultClient>) -> Self {
        Self { client }
    }

    /// Orchestrator for one resource type.
    pub fn resource<M: EntryModel>(&self) -> EntryResource<M> {
        EntryResource::new(self.client.clone())
    }

    /// Orchestrator for one data-source type.
    pub fn data_source<M: EntryModel>(&self) -> EntryDataSource<M> {
        EntryDataSource::new(self.client.clone())
    }

    /// All resource types this provider exposes.
    pub fn resource_types() -> Vec<TypeDescriptor> {
        vec![
            descriptor::<entries::user_credential::UserCredentialModel>(
                entries::user_credential::resource_schema(),
            ),
            descriptor::<entries::username_password::UsernamePasswordModel>(
                entries::username_password::resource_schema(),
            ),
            descriptor::<entries::secret::SecretModel>(entries::secret::resource_schema()),
            descriptor::<entries::ssh_key::SshKeyModel>(entries::ssh_key::resource_schema()),
            descriptor::<entries::connection_string::ConnectionStringModel>(
                entries::connection_string::resource_schema(),
            ),
            descriptor::<entries::api_key::ApiKeyModel>(entries::api_key::resource_schema()),
            descriptor::<entries::azure_service_principal::AzureServicePrincipalModel>(
                entries::azure_service_principal::resource_schema(),
            ),
        ]
    }

    /// All data-source types this provider exposes.
    pub fn data_source_types() -> Vec<TypeDescriptor> {
        vec![
            descriptor::<entries::user_credential::UserCredentialModel>(
                entries::user_credential::data_source_schema(),
            ),
            descriptor::<entries::username_password::UsernamePasswordModel>(
                entries::username_password::data_source_schema(),
            ),
            descriptor::<entries::secret::SecretModel>(entries::secret::data_source_schema()),
            descriptor::<entries::ssh_key::SshKeyModel>(entries::ssh_key::data_source_schema()),
            descriptor::<entries::connection_string::ConnectionStringModel>(
                entries::connection_string::data_source_schema(),
            ),
            descriptor::<entries::api_key::ApiKeyModel>(entries::api_key::data_source_schema()),
            descriptor::<entries::azure_service_principal::AzureServicePrincipalModel>(
                entries::azure_service_principal::data_source_schema(),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_types_registered_with_prefix() {
        let resources = Provider::resource_types();
        let data_sources = Provider::data_source_types();
        assert_eq!(resources.len(), 7);
        assert_eq!(data_sources.len(), 7);

        for descriptor in resources.iter().chain(data_sources.iter()) {
            assert!(descriptor.type_name.starts_with("vaultform_entry"));
        }

        assert!(resources
            .iter()
            .any(|d| d.type_name == "vaultform_entry_credential_api_key"));
        assert!(resources
            .iter()
            .any(|d| d.type_name == "vaultform_entry_user_credential"));
    }

    #[test]
    fn test_type_names_are_unique() {
        let mut names: Vec<String> = Provider::resource_types()
            .into_iter()
            .map(|d| d.type_name)
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 7);
    }
}
