//! Legacy user credential entry
//!
//! Predates the credential subtype family; same Default payload as the
//! username/password entry but without the domain attribute. Kept for
//! configurations written against the original type name.

use vaultform_entry::DefaultData;

use crate::convert::{EntryModel, ModelCommon};
use crate::entries::{as_computed, data_source_attributes, resource_attributes};
use crate::schema::{Attribute, Schema};
use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserCredentialModel {
    pub common: ModelCommon,

    pub username: Value<String>,
    pub password: Value<String>,
}

impl EntryModel for UserCredentialModel {
    type Payload = DefaultData;

    const TYPE_SUFFIX: &'static str = "entry_user_credential";
    const DISPLAY_NAME: &'static str = "user credential entry";

    fn common(&self) -> &ModelCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ModelCommon {
        &mut self.common
    }

    fn to_payload(&self) -> DefaultData {
        DefaultData {
            username: self.username.value_or_default(),
            domain: String::new(),
            password: self.password.value_or_default(),
        }
    }

    fn apply_payload(&mut self, payload: &DefaultData) {
        // No domain attribute on this legacy model; a domain set through
        // the vault UI is ignored here.
        self.username.set_non_empty(&payload.username);
        self.password.set_non_empty(&payload.password);
    }
}

fn payload_attributes() -> Vec<Attribute> {
    vec![
        Attribute::string("username", "The entry credential username.").optional(),
        Attribute::string("password", "The entry credential password.")
            .optional()
            .sensitive(),
    ]
}

pub fn resource_schema() -> Schema {
    Schema::new(
        "A user credential entry",
        resource_attributes(payload_attributes()),
    )
}

pub fn data_source_schema() -> Schema {
    Schema::new(
        "A user credential entry",
        data_source_attributes(as_computed(payload_attributes())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::model_from_entry;
    use vaultform_entry::{Entry, EntryData, EntrySubType};

    #[test]
    fn test_domain_is_dropped_on_read() {
        let entry = Entry {
            id: "id".to_string(),
            vault_id: "vault".to_string(),
            name: "svc".to_string(),
            sub_type: EntrySubType::Default,
            data: Some(EntryData::Default(DefaultData {
                username: "admin".to_string(),
                domain: "corp.local".to_string(),
                password: "hunter2".to_string(),
            })),
            ..Default::default()
        };

        let model: UserCredentialModel = model_from_entry(&entry);
        assert_eq!(model.username, Value::from("admin"));
        assert_eq!(model.password, Value::from("hunter2"));
    }
}
