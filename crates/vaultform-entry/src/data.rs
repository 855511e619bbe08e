//! Credential payload variants
//!
//! One struct per credential subtype, mirroring the vault's wire shape.
//! [`EntryData`] is the tagged union the rest of the system matches on;
//! the `as_*` accessors return `None` when the variant does not match,
//! which the mapping layer relies on for subtype isolation.

use serde::{Deserialize, Serialize};

use crate::entry::EntrySubType;

/// Username/password credential payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefaultData {
    pub username: String,
    pub domain: String,
    pub password: String,
}

/// Single-secret credential payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessCodeData {
    pub password: String,
}

/// SSH private key credential payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrivateKeyData {
    pub override_password: String,
    pub passphrase: String,
    pub private_key: String,
    pub public_key: String,
}

/// Connection string credential payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionStringData {
    pub connection_string: String,
}

/// API key credential payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiKeyData {
    pub api_id: String,
    pub api_key: String,
    pub tenant_id: String,
}

/// Azure service principal credential payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AzureServicePrincipalData {
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: String,
}

/// Variant payload of an [`crate::Entry`], keyed by its subtype tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntryData {
    Default(DefaultData),
    AccessCode(AccessCodeData),
    PrivateKey(PrivateKeyData),
    ConnectionString(ConnectionStringData),
    ApiKey(ApiKeyData),
    AzureServicePrincipal(AzureServicePrincipalData),
}

impl EntryData {
    /// The subtype tag this payload belongs to.
    pub fn sub_type(&self) -> EntrySubType {
        match self {
            EntryData::Default(_) => EntrySubType::Default,
            EntryData::AccessCode(_) => EntrySubType::AccessCode,
            EntryData::PrivateKey(_) => EntrySubType::PrivateKey,
            EntryData::ConnectionString(_) => EntrySubType::ConnectionString,
            EntryData::ApiKey(_) => EntrySubType::ApiKey,
            EntryData::AzureServicePrincipal(_) => EntrySubType::AzureServicePrincipal,
        }
    }

    pub fn as_default(&self) -> Option<&DefaultData> {
        match self {
            EntryData::Default(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_access_code(&self) -> Option<&AccessCodeData> {
        match self {
            EntryData::AccessCode(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_private_key(&self) -> Option<&PrivateKeyData> {
        match self {
            EntryData::PrivateKey(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_connection_string(&self) -> Option<&ConnectionStringData> {
        match self {
            EntryData::ConnectionString(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_api_key(&self) -> Option<&ApiKeyData> {
        match self {
            EntryData::ApiKey(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_azure_service_principal(&self) -> Option<&AzureServicePrincipalData> {
        match self {
            EntryData::AzureServicePrincipal(data) => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_matches_variant() {
        let data = EntryData::ApiKey(ApiKeyData {
            api_id: "a".to_string(),
            api_key: "k".to_string(),
            tenant_id: String::new(),
        });
        assert!(data.as_api_key().is_some());
        assert!(data.as_default().is_none());
        assert_eq!(data.sub_type(), EntrySubType::ApiKey);
    }

    #[test]
    fn test_payload_defaults_on_partial_json() {
        // The vault omits empty fields; missing fields must default to "".
        let data: DefaultData = serde_json::from_str(r#"{"username":"admin"}"#).unwrap();
        assert_eq!(data.username, "admin");
        assert_eq!(data.domain, "");
        assert_eq!(data.password, "");
    }
}
