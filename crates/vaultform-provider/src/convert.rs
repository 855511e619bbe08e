//! Generic entry/model conversion
//!
//! Every credential subtype repeats the same mapping: copy the shared
//! identity fields, tag the entry with the subtype, and pack/unpack the
//! variant payload. [`to_entry`] and [`model_from_entry`] implement that
//! pattern once; a subtype module only supplies its model struct and the
//! payload field lists.
//!
//! The two directions are deliberately asymmetric. Writing copies every
//! field verbatim, empty strings included, because the model represents
//! explicit user intent. Reading builds a fresh model and sets a field
//! only when the source value is non-empty, so a field set to "" upstream
//! comes back unset. That convention is part of the remote contract and is
//! kept as-is.

use vaultform_entry::{
    AccessCodeData, ApiKeyData, AzureServicePrincipalData, ConnectionStringData, DefaultData,
    Entry, EntryData, EntrySubType, EntryType, PrivateKeyData,
};

use crate::value::Value;

/// A credential payload variant, keyed by its subtype tag.
pub trait Payload: Default {
    const SUB_TYPE: EntrySubType;

    fn into_data(self) -> EntryData;

    /// Unwrap `data` as this payload, or `None` when the variant does not
    /// match. Callers that require subtype correctness check the entry's
    /// tags before converting; a mismatch here silently leaves the
    /// subtype-specific fields unset.
    fn from_data(data: &EntryData) -> Option<&Self>;
}

impl Payload for DefaultData {
    const SUB_TYPE: EntrySubType = EntrySubType::Default;

    fn into_data(self) -> EntryData {
        EntryData::Default(self)
    }

    fn from_data(data: &EntryData) -> Option<&Self> {
        data.as_default()
    }
}

impl Payload for AccessCodeData {
    const SUB_TYPE: EntrySubType = EntrySubType::AccessCode;

    fn into_data(self) -> EntryData {
        EntryData::AccessCode(self)
    }

    fn from_data(data: &EntryData) -> Option<&Self> {
        data.as_access_code()
    }
}

impl Payload for PrivateKeyData {
    const SUB_TYPE: EntrySubType = EntrySubType::PrivateKey;

    fn into_data(self) -> EntryData {
        EntryData::PrivateKey(self)
    }

    fn from_data(data: &EntryData) -> Option<&Self> {
        data.as_private_key()
    }
}

impl Payload for ConnectionStringData {
    const SUB_TYPE: EntrySubType = EntrySubType::ConnectionString;

    fn into_data(self) -> EntryData {
        EntryData::ConnectionString(self)
    }

    fn from_data(data: &EntryData) -> Option<&Self> {
        data.as_connection_string()
    }
}

impl Payload for ApiKeyData {
    const SUB_TYPE: EntrySubType = EntrySubType::ApiKey;

    fn into_data(self) -> EntryData {
        EntryData::ApiKey(self)
    }

    fn from_data(data: &EntryData) -> Option<&Self> {
        data.as_api_key()
    }
}

impl Payload for AzureServicePrincipalData {
    const SUB_TYPE: EntrySubType = EntrySubType::AzureServicePrincipal;

    fn into_data(self) -> EntryData {
        EntryData::AzureServicePrincipal(self)
    }

    fn from_data(data: &EntryData) -> Option<&Self> {
        data.as_azure_service_principal()
    }
}

/// Attributes shared by every credential entry model.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelCommon {
    pub id: Value<String>,
    pub vault_id: Value<String>,
    pub name: Value<String>,
    pub folder: Value<String>,
    pub description: Value<String>,
    /// `None` when the tags attribute is absent, which is distinct from an
    /// explicitly empty list.
    pub tags: Option<Vec<Value<String>>>,
}

/// One credential subtype's external-facing model.
///
/// Implemented by each subtype module; everything else in the crate works
/// through this trait.
pub trait EntryModel: Default + Clone {
    type Payload: Payload;

    /// Type-name suffix appended to the provider prefix, e.g.
    /// `entry_credential_api_key`.
    const TYPE_SUFFIX: &'static str;

    /// Human phrase used in diagnostics, e.g. `api key credential entry`.
    const DISPLAY_NAME: &'static str;

    fn common(&self) -> &ModelCommon;
    fn common_mut(&mut self) -> &mut ModelCommon;

    /// Pack the subtype-specific attributes into a payload. Unset
    /// attributes become empty strings (explicit user intent).
    fn to_payload(&self) -> Self::Payload;

    /// Set subtype-specific attributes from a payload, non-empty fields
    /// only.
    fn apply_payload(&mut self, payload: &Self::Payload);
}

/// Convert a model into a vault entry. Pure and total; identifier
/// validation happens upstream.
pub fn to_entry<M: EntryModel>(model: &M) -> Entry {
    let common = model.common();

    let tags = common
        .tags
        .as_ref()
        .map(|tags| tags.iter().map(Value::value_or_default).collect());

    Entry {
        id: common.id.value_or_default(),
        vault_id: common.vault_id.value_or_default(),
        name: common.name.value_or_default(),
        path: common.folder.value_or_default(),
        entry_type: EntryType::Credential,
        sub_type: M::Payload::SUB_TYPE,
        description: common.description.value_or_default(),
        tags,
        data: Some(model.to_payload().into_data()),
    }
}

/// Build a fresh model from a vault entry.
///
/// Id, vault id and name are copied verbatim; folder, description, tags
/// and the payload fields are set only when non-empty. A payload of the
/// wrong variant leaves the subtype-specific fields unset.
pub fn model_from_entry<M: EntryModel>(entry: &Entry) -> M {
    let mut model = M::default();

    {
        let common = model.common_mut();
        common.id = Value::known(entry.id.clone());
        common.vault_id = Value::known(entry.vault_id.clone());
        common.name = Value::known(entry.name.clone());
        common.folder.set_non_empty(&entry.path);
        common.description.set_non_empty(&entry.description);

        if let Some(tags) = &entry.tags {
            common.tags = Some(tags.iter().map(|t| Value::known(t.clone())).collect());
        }
    }

    if let Some(data) = &entry.data {
        if let Some(payload) = M::Payload::from_data(data) {
            model.apply_payload(payload);
        }
    }

    model
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::api_key::ApiKeyModel;
    use crate::entries::username_password::UsernamePasswordModel;

    fn sample_model() -> ApiKeyModel {
        ApiKeyModel {
            common: ModelCommon {
                id: Value::from("22222222-2222-2222-2222-222222222222"),
                vault_id: Value::from("11111111-1111-1111-1111-111111111111"),
                name: Value::from("svc"),
                folder: Value::from("infra/prod"),
                description: Value::Null,
                tags: Some(vec![Value::from("b"), Value::from("a"), Value::from("b")]),
            },
            api_id: Value::from("a"),
            api_key: Value::from("k"),
            tenant_id: Value::Null,
        }
    }

    #[test]
    fn test_to_entry_copies_intent_verbatim() {
        let entry = to_entry(&sample_model());

        assert_eq!(entry.id, "22222222-2222-2222-2222-222222222222");
        assert_eq!(entry.vault_id, "11111111-1111-1111-1111-111111111111");
        assert_eq!(entry.name, "svc");
        assert_eq!(entry.path, "infra/prod");
        // Unset description is written as an empty string.
        assert_eq!(entry.description, "");
        assert_eq!(entry.sub_type, EntrySubType::ApiKey);
        // Tags keep order and duplicates.
        assert_eq!(
            entry.tags,
            Some(vec!["b".to_string(), "a".to_string(), "b".to_string()])
        );

        let data = entry.data.unwrap();
        let payload = data.as_api_key().unwrap();
        assert_eq!(payload.api_id, "a");
        assert_eq!(payload.api_key, "k");
        assert_eq!(payload.tenant_id, "");
    }

    #[test]
    fn test_absent_tags_stay_absent() {
        let mut model = sample_model();
        model.common.tags = None;
        assert_eq!(to_entry(&model).tags, None);
    }

    #[test]
    fn test_round_trip_preserves_non_empty_fields() {
        let model = sample_model();
        let round_tripped: ApiKeyModel = model_from_entry(&to_entry(&model));

        assert_eq!(round_tripped.common.id, model.common.id);
        assert_eq!(round_tripped.common.vault_id, model.common.vault_id);
        assert_eq!(round_tripped.common.name, model.common.name);
        assert_eq!(round_tripped.common.folder, model.common.folder);
        assert_eq!(round_tripped.common.tags, model.common.tags);
        assert_eq!(round_tripped.api_id, model.api_id);
        assert_eq!(round_tripped.api_key, model.api_key);
        // Fields that were unset come back unset, not empty.
        assert!(round_tripped.common.description.is_null());
        assert!(round_tripped.tenant_id.is_null());
    }

    #[test]
    fn test_wrong_payload_variant_leaves_fields_unset() {
        let mut entry = to_entry(&sample_model());
        entry.data = Some(EntryData::Default(DefaultData {
            username: "admin".to_string(),
            domain: String::new(),
            password: "hunter2".to_string(),
        }));

        let model: ApiKeyModel = model_from_entry(&entry);
        assert!(model.api_id.is_null());
        assert!(model.api_key.is_null());
        assert!(model.tenant_id.is_null());
        // Common fields still convert.
        assert_eq!(model.common.name, Value::from("svc"));
    }

    #[test]
    fn test_missing_payload_is_tolerated() {
        let mut entry = to_entry(&sample_model());
        entry.data = None;

        let model: ApiKeyModel = model_from_entry(&entry);
        assert!(model.api_key.is_null());
    }

    #[test]
    fn test_empty_payload_fields_read_back_unset() {
        let entry = Entry {
            id: "id".to_string(),
            vault_id: "vault".to_string(),
            name: "user".to_string(),
            sub_type: EntrySubType::Default,
            data: Some(EntryData::Default(DefaultData {
                username: "admin".to_string(),
                domain: String::new(),
                password: String::new(),
            })),
            ..Default::default()
        };

        let model: UsernamePasswordModel = model_from_entry(&entry);
        assert_eq!(model.username, Value::from("admin"));
        assert!(model.domain.is_null());
        assert!(model.password.is_null());
    }
}
