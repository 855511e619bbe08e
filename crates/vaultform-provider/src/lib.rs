//! Declarative resource layer over vault credential entries
//!
//! This crate translates between a declarative-infrastructure attribute
//! model (three-state string values, optional/sensitive flags, plan
//! modifiers) and the vault's [`Entry`](vaultform_entry::Entry) record,
//! and sequences the CRUD calls against a [`VaultClient`](vaultform_client::VaultClient).
//!
//! Seven credential entry types are exposed, each as a resource (full
//! lifecycle plus import) and a data source (read-only lookup):
//! user credential, username/password, secret, SSH key, connection string,
//! API key, and Azure service principal.
//!
//! The conversion logic is written once, generically: a subtype module
//! supplies its model struct and schema, and the [`convert`] machinery
//! handles the shared fields and the asymmetric empty-string convention
//! (writes send empty strings for unset attributes, reads only set
//! attributes from non-empty values).

pub mod convert;
pub mod data_source;
pub mod entries;
pub mod error;
pub mod provider;
pub mod resource;
pub mod schema;
pub mod validators;
pub mod value;

pub use convert::{model_from_entry, to_entry, EntryModel, ModelCommon, Payload};
pub use data_source::EntryDataSource;
pub use error::{Diagnostic, ProviderError};
pub use provider::{Provider, TypeDescriptor, PROVIDER_TYPE_NAME};
pub use resource::{EntryResource, ReadOutcome};
pub use schema::{Attribute, AttributeKind, PlanModifier, Schema, StringValidator};
pub use value::Value;
