//! Username/password credential entry

use vaultform_entry::DefaultData;

use crate::convert::{EntryModel, ModelCommon};
use crate::entries::{as_computed, data_source_attributes, resource_attributes};
use crate::schema::{Attribute, Schema};
use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsernamePasswordModel {
    pub common: ModelCommon,

    pub username: Value<String>,
    pub domain: Value<String>,
    pub password: Value<String>,
}

impl EntryModel for UsernamePasswordModel {
    type Payload = DefaultData;

    const TYPE_SUFFIX: &'static str = "entry_credential_username_password";
    const DISPLAY_NAME: &'static str = "username password credential entry";

    fn common(&self) -> &ModelCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ModelCommon {
        &mut self.common
    }

    fn to_payload(&self) -> DefaultData {
        DefaultData {
            username: self.username.value_or_default(),
            domain: self.domain.value_or_default(),
            password: self.password.value_or_default(),
        }
    }

    fn apply_payload(&mut self, payload: &DefaultData) {
        self.username.set_non_empty(&payload.username);
        self.domain.set_non_empty(&payload.domain);
        self.password.set_non_empty(&payload.password);
    }
}

fn payload_attributes() -> Vec<Attribute> {
    vec![
        Attribute::string("username", "The entry credential username.").optional(),
        Attribute::string("domain", "The entry credential domain.").optional(),
        Attribute::string("password", "The entry credential password.")
            .optional()
            .sensitive(),
    ]
}

pub fn resource_schema() -> Schema {
    Schema::new(
        "A username and password credential entry",
        resource_attributes(payload_attributes()),
    )
}

pub fn data_source_schema() -> Schema {
    Schema::new(
        "A username and password credential entry",
        data_source_attributes(as_computed(payload_attributes())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_is_sensitive() {
        let schema = resource_schema();
        assert!(schema.attribute("password").unwrap().sensitive);
        assert!(!schema.attribute("username").unwrap().sensitive);
        assert!(!schema.attribute("domain").unwrap().sensitive);
    }
}
