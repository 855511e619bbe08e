//! API key credential entry

use vaultform_entry::ApiKeyData;

use crate::convert::{EntryModel, ModelCommon};
use crate::entries::{as_computed, data_source_attributes, resource_attributes};
use crate::schema::{Attribute, Schema};
use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApiKeyModel {
    pub common: ModelCommon,

    pub api_id: Value<String>,
    pub api_key: Value<String>,
    pub tenant_id: Value<String>,
}

impl EntryModel for ApiKeyModel {
    type Payload = ApiKeyData;

    const TYPE_SUFFIX: &'static str = "entry_credential_api_key";
    const DISPLAY_NAME: &'static str = "api key credential entry";

    fn common(&self) -> &ModelCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ModelCommon {
        &mut self.common
    }

    fn to_payload(&self) -> ApiKeyData {
        ApiKeyData {
            api_id: self.api_id.value_or_default(),
            api_key: self.api_key.value_or_default(),
            tenant_id: self.tenant_id.value_or_default(),
        }
    }

    fn apply_payload(&mut self, payload: &ApiKeyData) {
        self.api_id.set_non_empty(&payload.api_id);
        self.api_key.set_non_empty(&payload.api_key);
        self.tenant_id.set_non_empty(&payload.tenant_id);
    }
}

fn payload_attributes() -> Vec<Attribute> {
    vec![
        Attribute::string("api_id", "The entry credential API ID.").optional(),
        Attribute::string("api_key", "The entry credential API key.")
            .optional()
            .sensitive(),
        Attribute::string("tenant_id", "The entry credential tenant ID.").optional(),
    ]
}

pub fn resource_schema() -> Schema {
    Schema::new(
        "An API key credential entry",
        resource_attributes(payload_attributes()),
    )
}

pub fn data_source_schema() -> Schema {
    Schema::new(
        "An API key credential entry",
        data_source_attributes(as_computed(payload_attributes())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_is_sensitive() {
        let schema = resource_schema();
        assert!(schema.attribute("api_key").unwrap().sensitive);
        assert!(!schema.attribute("api_id").unwrap().sensitive);
    }

    #[test]
    fn test_data_source_payload_is_computed() {
        let schema = data_source_schema();
        let api_key = schema.attribute("api_key").unwrap();
        assert!(api_key.computed);
        assert!(!api_key.optional);
        assert!(api_key.sensitive);
    }
}
