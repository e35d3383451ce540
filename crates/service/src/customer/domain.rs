use models::customer;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;

/// Length of the hyphenated UUID form, the only id format accepted on the wire.
const HYPHENATED_LEN: usize = 36;

/// Customer as seen by API clients (camelCase JSON, every field a string).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    /// Empty until the record has been stored.
    #[serde(deserialize_with = "empty_if_null")]
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub phone_number: String,
    pub address: String,
}

fn empty_if_null<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

impl From<customer::Model> for Customer {
    fn from(m: customer::Model) -> Self {
        Self {
            customer_id: m.id.to_string(),
            first_name: m.first_name,
            last_name: m.last_name,
            email_address: m.email_address,
            phone_number: m.phone_number,
            address: m.address,
        }
    }
}

impl Customer {
    /// Persistence row carrying these fields under `id`; `customer_id` is ignored.
    pub fn into_model(self, id: Uuid) -> customer::Model {
        customer::Model {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email_address: self.email_address,
            phone_number: self.phone_number,
            address: self.address,
        }
    }

    pub fn has_id(&self) -> bool {
        !self.customer_id.trim().is_empty()
    }
}

/// Parse a customer id in hyphenated form (`8-4-4-4-12` hex digits).
pub fn parse_customer_id(raw: &str) -> Result<Uuid, ServiceError> {
    if raw.len() != HYPHENATED_LEN {
        return Err(ServiceError::BadRequest(format!("malformed customer id: {raw:?}")));
    }
    Uuid::try_parse(raw).map_err(|_| ServiceError::BadRequest(format!("malformed customer id: {raw:?}")))
}
