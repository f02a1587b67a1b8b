use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// CustomerEntity is the stored row for a customer; `password` holds the
// one-way digest, never the plaintext.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct CustomerEntity {
    pub customer_id: String,
    pub version: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub address: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl CustomerEntity {
    pub fn new(name: &str, email: &str, phone_number: &str,
               password: &str, address: &str) -> Self {
        Self {
            customer_id: Uuid::new_v4().to_string(),
            version: 0,
            name: name.to_string(),
            email: email.to_string(),
            phone_number: phone_number.to_string(),
            password: password.to_string(),
            address: address.to_string(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for CustomerEntity {
    fn id(&self) -> String {
        self.customer_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}
