//! Connection string credential entry

use vaultform_entry::ConnectionStringData;

use crate::convert::{EntryModel, ModelCommon};
use crate::entries::{as_computed, data_source_attributes, resource_attributes};
use crate::schema::{Attribute, Schema};
use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConnectionStringModel {
    pub common: ModelCommon,

    pub connection_string: Value<String>,
}

impl EntryModel for ConnectionStringModel {
    type Payload = ConnectionStringData;

    const TYPE_SUFFIX: &'static str = "entry_credential_connection_string";
    const DISPLAY_NAME: &'static str = "connection string credential entry";

    fn common(&self) -> &ModelCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ModelCommon {
        &mut self.common
    }

    fn to_payload(&self) -> ConnectionStringData {
        ConnectionStringData {
            connection_string: self.connection_string.value_or_default(),
        }
    }

    fn apply_payload(&mut self, payload: &ConnectionStringData) {
        self.connection_string
            .set_non_empty(&payload.connection_string);
    }
}

fn payload_attributes() -> Vec<Attribute> {
    vec![
        Attribute::string("connection_string", "The entry credential connection string.")
            .optional()
            .sensitive(),
    ]
}

pub fn resource_schema() -> Schema {
    Schema::new(
        "A connection string credential entry",
        resource_attributes(payload_attributes()),
    )
}

pub fn data_source_schema() -> Schema {
    Schema::new(
        "A connection string credential entry",
        data_source_attributes(as_computed(payload_attributes())),
    )
}
