//! Vault entry domain model
//!
//! This crate defines the [`Entry`] record exchanged with the remote vault:
//! common identity fields (id, vault, name, folder path), the
//! type/subtype tags selecting a credential variant, and the variant
//! payload itself ([`EntryData`]).
//!
//! Both the HTTP client and the provider mapping layer depend on this
//! crate; it has no I/O of its own.

mod data;
mod entry;

pub use data::{
    AccessCodeData, ApiKeyData, AzureServicePrincipalData, ConnectionStringData, DefaultData,
    EntryData, PrivateKeyData,
};
pub use entry::{Entry, EntrySubType, EntryType};
