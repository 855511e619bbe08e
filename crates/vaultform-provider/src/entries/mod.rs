//! Credential subtype modules
//!
//! One module per externally-visible entry type. Each declares its model
//! struct, the payload mapping, and the resource / data-source schemas;
//! the CRUD and conversion logic is shared generically.

pub mod api_key;
pub mod azure_service_principal;
pub mod connection_string;
pub mod secret;
pub mod ssh_key;
pub mod user_credential;
pub mod username_password;

use crate::schema::{Attribute, PlanModifier, StringValidator};

/// The attributes every credential resource shares, with the
/// subtype-specific attributes appended.
pub(crate) fn resource_attributes(payload: Vec<Attribute>) -> Vec<Attribute> {
    let mut attributes = vec![
        Attribute::string(
            "id",
            "The ID of the entry. This is set by the provider after creation.",
        )
        .computed()
        .plan_modifier(PlanModifier::UseStateForUnknown),
        Attribute::string("vault_id", "The ID of the vault.")
            .required()
            .plan_modifier(PlanModifier::RequiresReplace),
        Attribute::string("name", "The name of the entry.").required(),
        Attribute::string("folder", "The folder path where the entry is created.").optional(),
        Attribute::string("description", "The description of the entry.").optional(),
        Attribute::string_list("tags", "A list of tags to add to the entry.").optional(),
    ];
    attributes.extend(payload);
    attributes
}

/// The attributes every credential data source shares. The id pair is
/// user-supplied and UUID-validated; everything else is computed from the
/// fetched entry.
pub(crate) fn data_source_attributes(payload: Vec<Attribute>) -> Vec<Attribute> {
    let mut attributes = vec![
        Attribute::string("id", "The ID of the entry.")
            .required()
            .validator(StringValidator::EntryId),
        Attribute::string("vault_id", "The ID of the vault.")
            .required()
            .validator(StringValidator::VaultId),
        Attribute::string("name", "The name of the entry.").computed(),
        Attribute::string("folder", "The folder path of the entry.").computed(),
        Attribute::string("description", "The description of the entry.").computed(),
        Attribute::string_list("tags", "A list of tags added to the entry.").computed(),
    ];
    attributes.extend(payload);
    attributes
}

/// Rewrite a resource payload attribute list for data-source use:
/// everything computed, nothing user-settable. Sensitivity carries over.
pub(crate) fn as_computed(payload: Vec<Attribute>) -> Vec<Attribute> {
    payload
        .into_iter()
        .map(|a| {
            Attribute {
                optional: false,
                required: false,
                ..a
            }
            .computed()
        })
        .collect()
}
