//! Secret credential entry
//!
//! Single opaque secret; the vault stores it as the "access code" subtype.

use vaultform_entry::AccessCodeData;

use crate::convert::{EntryModel, ModelCommon};
use crate::entries::{as_computed, data_source_attributes, resource_attributes};
use crate::schema::{Attribute, Schema};
use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SecretModel {
    pub common: ModelCommon,

    pub secret: Value<String>,
}

impl EntryModel for SecretModel {
    type Payload = AccessCodeData;

    const TYPE_SUFFIX: &'static str = "entry_credential_secret";
    const DISPLAY_NAME: &'static str = "secret credential entry";

    fn common(&self) -> &ModelCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ModelCommon {
        &mut self.common
    }

    fn to_payload(&self) -> AccessCodeData {
        AccessCodeData {
            password: self.secret.value_or_default(),
        }
    }

    fn apply_payload(&mut self, payload: &AccessCodeData) {
        self.secret.set_non_empty(&payload.password);
    }
}

fn payload_attributes() -> Vec<Attribute> {
    vec![Attribute::string("secret", "The entry credential secret.")
        .optional()
        .sensitive()]
}

pub fn resource_schema() -> Schema {
    Schema::new(
        "A secret credential entry",
        resource_attributes(payload_attributes()),
    )
}

pub fn data_source_schema() -> Schema {
    Schema::new(
        "A secret credential entry",
        data_source_attributes(as_computed(payload_attributes())),
    )
}
