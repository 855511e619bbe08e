use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::EntryData;

/// Top-level entry type tag.
///
/// The vault stores other entry types as well; this layer only ever deals
/// with credential entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EntryType {
    #[default]
    Credential,
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryType::Credential => write!(f, "Credential"),
        }
    }
}

/// Credential subtype tag, selecting which [`EntryData`] variant applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EntrySubType {
    /// Username/password credential.
    #[default]
    Default,
    /// Single-secret ("access code") credential.
    AccessCode,
    /// SSH private key credential.
    PrivateKey,
    /// Connection string credential.
    ConnectionString,
    /// API key credential.
    ApiKey,
    /// Azure service principal credential.
    AzureServicePrincipal,
}

impl fmt::Display for EntrySubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntrySubType::Default => "Default",
            EntrySubType::AccessCode => "AccessCode",
            EntrySubType::PrivateKey => "PrivateKey",
            EntrySubType::ConnectionString => "ConnectionString",
            EntrySubType::ApiKey => "ApiKey",
            EntrySubType::AzureServicePrincipal => "AzureServicePrincipal",
        };
        write!(f, "{}", s)
    }
}

/// One stored credential entry.
///
/// `id` is assigned by the vault on creation and is empty before that.
/// `path` is the folder location; an empty string means the vault root.
/// `tags` is order-preserving and not deduplicated; `None` means the tags
/// attribute was never set, which is distinct from an explicitly empty list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entry {
    pub id: String,
    pub vault_id: String,
    pub name: String,
    pub path: String,
    pub entry_type: EntryType,
    pub sub_type: EntrySubType,
    pub description: String,
    pub tags: Option<Vec<String>>,
    pub data: Option<EntryData>,
}

impl Entry {
    /// Whether this entry carries the expected type/subtype tag pair.
    pub fn is_sub_type(&self, sub_type: EntrySubType) -> bool {
        self.entry_type == EntryType::Credential && self.sub_type == sub_type
    }
}
