//! Identifier validation and import-token parsing

use uuid::Uuid;

use crate::error::ProviderError;
use crate::value::Value;

const ENTRY_ID_MESSAGE: &str =
    "entry id is not a valid UUID (ex.: 00000000-0000-0000-0000-000000000000)";
const VAULT_ID_MESSAGE: &str =
    "vault id is not a valid UUID (ex.: 00000000-0000-0000-0000-000000000000)";

/// Validate an entry id attribute. Null and unknown values pass; anything
/// else must parse as a UUID.
pub fn validate_entry_id(value: &Value<String>) -> Result<(), ProviderError> {
    validate_uuid(value, ENTRY_ID_MESSAGE)
}

/// Validate a vault id attribute. Same UUID shape as entry ids.
pub fn validate_vault_id(value: &Value<String>) -> Result<(), ProviderError> {
    validate_uuid(value, VAULT_ID_MESSAGE)
}

fn validate_uuid(value: &Value<String>, message: &str) -> Result<(), ProviderError> {
    let Some(id) = value.as_known() else {
        return Ok(());
    };

    Uuid::parse_str(id)
        .map(|_| ())
        .map_err(|err| ProviderError::validation(message, err.to_string()))
}

/// Parse an import token of the form `<vault_id>/<entry_id>`.
///
/// Splits on the first `/` only; the remainder is the entry id in full,
/// even if it contains further slashes. The segments are returned
/// unvalidated; imports bypass the per-attribute validators, so callers
/// re-check UUID shape separately if they need to.
pub fn parse_entry_import_id(id: &str) -> Result<(String, String), ProviderError> {
    let Some((vault_id, entry_id)) = id.split_once('/') else {
        return Err(ProviderError::validation(
            "Invalid Resource ID",
            format!("unexpected format of ID ({}), expected <vault_id>/<entry_id>", id),
        ));
    };

    Ok((vault_id.to_string(), entry_id.to_string()))
}
