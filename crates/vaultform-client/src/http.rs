//! HTTP implementation of [`VaultClient`]
//!
//! Talks to the vault's REST API. Every mutation goes through a response
//! envelope carrying a save-result code; `SAVE_RESULT_NOT_FOUND` and plain
//! 404 responses both map to [`ClientError::NotFound`].

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use vaultform_entry::{
    AccessCodeData, ApiKeyData, AzureServicePrincipalData, ConnectionStringData, DefaultData,
    Entry, EntryData, EntrySubType, EntryType, PrivateKeyData,
};

use crate::client::VaultClient;
use crate::config::ClientConfig;
use crate::error::ClientError;

/// Save-result codes returned by the vault API.
const SAVE_RESULT_SUCCESS: u32 = 1;
const SAVE_RESULT_ACCESS_DENIED: u32 = 2;
const SAVE_RESULT_NOT_FOUND: u32 = 4;

/// Vault REST API client
pub struct HttpVaultClient {
    client: Client,
    base_url: String,
    app_token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EntryRequest<'a> {
    id: &'a str,
    vault_id: &'a str,
    name: &'a str,
    path: &'a str,
    #[serde(rename = "type")]
    entry_type: EntryType,
    sub_type: EntrySubType,
    description: &'a str,
    tags: Option<&'a [String]>,
    data: Option<&'a EntryData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntryResponse {
    #[serde(default)]
    id: String,
    #[serde(default)]
    vault_id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    path: String,
    #[serde(rename = "type")]
    entry_type: EntryType,
    sub_type: EntrySubType,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiEnvelope<T> {
    result: u32,
    #[serde(default)]
    message: Option<String>,
    data: Option<T>,
}

impl EntryResponse {
    fn into_entry(self) -> Result<Entry, ClientError> {
        let data = match self.data {
            Some(value) => Some(decode_payload(self.sub_type, value)?),
            None => None,
        };

        Ok(Entry {
            id: self.id,
            vault_id: self.vault_id,
            name: self.name,
            path: self.path,
            entry_type: self.entry_type,
            sub_type: self.sub_type,
            description: self.description,
            tags: self.tags,
            data,
        })
    }
}

/// Decode the subtype-specific payload blob.
fn decode_payload(sub_type: EntrySubType, value: serde_json::Value) -> Result<EntryData, ClientError> {
    let decode = |err: serde_json::Error| ClientError::Decode(err.to_string());

    Ok(match sub_type {
        EntrySubType::Default => EntryData::Default(
            serde_json::from_value::<DefaultData>(value).map_err(decode)?,
        ),
        EntrySubType::AccessCode => EntryData::AccessCode(
            serde_json::from_value::<AccessCodeData>(value).map_err(decode)?,
        ),
        EntrySubType::PrivateKey => EntryData::PrivateKey(
            serde_json::from_value::<PrivateKeyData>(value).map_err(decode)?,
        ),
        EntrySubType::ConnectionString => EntryData::ConnectionString(
            serde_json::from_value::<ConnectionStringData>(value).map_err(decode)?,
        ),
        EntrySubType::ApiKey => EntryData::ApiKey(
            serde_json::from_value::<ApiKeyData>(value).map_err(decode)?,
        ),
        EntrySubType::AzureServicePrincipal => EntryData::AzureServicePrincipal(
            serde_json::from_value::<AzureServicePrincipalData>(value).map_err(decode)?,
        ),
    })
}

impl HttpVaultClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.server_url.trim_end_matches('/').to_string(),
            app_token: config.app_token.clone(),
        }
    }

    fn entries_url(&self, vault_id: &str) -> String {
        format!("{}/api/v1/vaults/{}/entries", self.base_url, vault_id)
    }

    fn entry_url(&self, vault_id: &str, entry_id: &str) -> String {
        format!("{}/{}", self.entries_url(vault_id), entry_id)
    }

    fn request_body<'a>(entry: &'a Entry) -> EntryRequest<'a> {
        EntryRequest {
            id: &entry.id,
            vault_id: &entry.vault_id,
            name: &entry.name,
            path: &entry.path,
            entry_type: entry.entry_type,
            sub_type: entry.sub_type,
            description: &entry.description,
            tags: entry.tags.as_deref(),
            data: entry.data.as_ref(),
        }
    }

    /// Map a non-success HTTP status before looking at the envelope.
    fn check_status(status: StatusCode, context: &str) -> Result<(), ClientError> {
        match status {
            s if s.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(ClientError::not_found(context)),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(ClientError::Auth(format!("{}: {}", context, status)))
            }
            s => Err(ClientError::api(format!("{}: unexpected status {}", context, s))),
        }
    }

    /// Map the envelope's save-result code.
    fn check_result<T>(envelope: &ApiEnvelope<T>, context: &str) -> Result<(), ClientError> {
        match envelope.result {
            SAVE_RESULT_SUCCESS => Ok(()),
            SAVE_RESULT_NOT_FOUND => Err(ClientError::not_found(context)),
            SAVE_RESULT_ACCESS_DENIED => Err(ClientError::Auth(format!(
                "{}: access denied",
                context
            ))),
            code => Err(ClientError::api(format!(
                "{}: {}",
                context,
                envelope
                    .message
                    .clone()
                    .unwrap_or_else(|| format!("save result {}", code))
            ))),
        }
    }
}

#[async_trait]
impl VaultClient for HttpVaultClient {
    async fn create_entry(&self, entry: &Entry) -> Result<String, ClientError> {
        tracing::debug!(vault_id = %entry.vault_id, name = %entry.name, "creating entry");

        let response = self
            .client
            .post(self.entries_url(&entry.vault_id))
            .bearer_auth(&self.app_token)
            .json(&Self::request_body(entry))
            .send()
            .await?;

        Self::check_status(response.status(), "create entry")?;

        let envelope: ApiEnvelope<EntryResponse> = response.json().await?;
        Self::check_result(&envelope, "create entry")?;

        let created = envelope
            .data
            .ok_or_else(|| ClientError::Decode("create response missing entry".to_string()))?;

        Ok(created.id)
    }

    async fn get_entry(&self, vault_id: &str, entry_id: &str) -> Result<Entry, ClientError> {
        tracing::debug!(vault_id, entry_id, "fetching entry");

        let response = self
            .client
            .get(self.entry_url(vault_id, entry_id))
            .bearer_auth(&self.app_token)
            .send()
            .await?;

        Self::check_status(response.status(), entry_id)?;

        let envelope: ApiEnvelope<EntryResponse> = response.json().await?;
        Self::check_result(&envelope, entry_id)?;

        envelope
            .data
            .ok_or_else(|| ClientError::Decode("get response missing entry".to_string()))?
            .into_entry()
    }

    async fn update_entry(&self, entry: &Entry) -> Result<String, ClientError> {
        tracing::debug!(vault_id = %entry.vault_id, entry_id = %entry.id, "updating entry");

        let response = self
            .client
            .put(self.entry_url(&entry.vault_id, &entry.id))
            .bearer_auth(&self.app_token)
            .json(&Self::request_body(entry))
            .send()
            .await?;

        Self::check_status(response.status(), &entry.id)?;

        let envelope: ApiEnvelope<EntryResponse> = response.json().await?;
        Self::check_result(&envelope, &entry.id)?;

        Ok(envelope.data.map(|e| e.id).unwrap_or_else(|| entry.id.clone()))
    }

    async fn delete_entry(&self, entry: &Entry) -> Result<(), ClientError> {
        tracing::debug!(vault_id = %entry.vault_id, entry_id = %entry.id, "deleting entry");

        let response = self
            .client
            .delete(self.entry_url(&entry.vault_id, &entry.id))
            .bearer_auth(&self.app_token)
            .send()
            .await?;

        Self::check_status(response.status(), &entry.id)?;

        let envelope: ApiEnvelope<serde_json::Value> = response.json().await?;
        Self::check_result(&envelope, &entry.id)
    }
}
