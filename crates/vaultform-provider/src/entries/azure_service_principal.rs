//! Azure service principal credential entry

use vaultform_entry::AzureServicePrincipalData;

use crate::convert::{EntryModel, ModelCommon};
use crate::entries::{as_computed, data_source_attributes, resource_attributes};
use crate::schema::{Attribute, Schema};
use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AzureServicePrincipalModel {
    pub common: ModelCommon,

    pub client_id: Value<String>,
    pub client_secret: Value<String>,
    pub tenant_id: Value<String>,
}

impl EntryModel for AzureServicePrincipalModel {
    type Payload = AzureServicePrincipalData;

    const TYPE_SUFFIX: &'static str = "entry_credential_azure_service_principal";
    const DISPLAY_NAME: &'static str = "Azure service principal credential entry";

    fn common(&self) -> &ModelCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ModelCommon {
        &mut self.common
    }

    fn to_payload(&self) -> AzureServicePrincipalData {
        AzureServicePrincipalData {
            client_id: self.client_id.value_or_default(),
            client_secret: self.client_secret.value_or_default(),
            tenant_id: self.tenant_id.value_or_default(),
        }
    }

    fn apply_payload(&mut self, payload: &AzureServicePrincipalData) {
        self.client_id.set_non_empty(&payload.client_id);
        self.client_secret.set_non_empty(&payload.client_secret);
        self.tenant_id.set_non_empty(&payload.tenant_id);
    }
}

fn payload_attributes() -> Vec<Attribute> {
    vec![
        Attribute::string("client_id", "The entry credential client ID.").optional(),
        Attribute::string("client_secret", "The entry credential client secret.")
            .optional()
            .sensitive(),
        Attribute::string("tenant_id", "The entry credential tenant ID.").optional(),
    ]
}

pub fn resource_schema() -> Schema {
    Schema::new(
        "An Azure service principal credential entry",
        resource_attributes(payload_attributes()),
    )
}

pub fn data_source_schema() -> Schema {
    Schema::new(
        "An Azure service principal credential entry",
        data_source_attributes(as_computed(payload_attributes())),
    )
}
