use chrono::{NaiveDateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::domain::{require_non_blank, Identifiable};
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::date::serializer;

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern");
    // two-digit network prefix followed by 8 digits
    static ref PHONE_PATTERN: Regex =
        Regex::new(r"^(010|011|012|015)\d{8}$").expect("phone pattern");
}

// CustomerDto is the customer payload exchanged with the HTTP layer. On the
// way in `password` carries the plaintext, on the way out the digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CustomerDto {
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

impl CustomerDto {
    pub fn new(name: &str, email: &str, phone_number: &str,
               password: &str, address: &str) -> CustomerDto {
        CustomerDto {
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

    pub fn validate(&self) -> LibraryResult<()> {
        require_non_blank("name", self.name.as_str())?;
        require_non_blank("email", self.email.as_str())?;
        require_non_blank("phone_number", self.phone_number.as_str())?;
        require_non_blank("password", self.password.as_str())?;
        require_non_blank("address", self.address.as_str())?;
        if !EMAIL_PATTERN.is_match(self.email.as_str()) {
            return Err(LibraryError::validation(
                format!("invalid email {}", self.email).as_str(), None));
        }
        if !PHONE_PATTERN.is_match(self.phone_number.as_str()) {
            return Err(LibraryError::validation("invalid phone number", None));
        }
        Ok(())
    }
}

impl Identifiable for CustomerDto {
    fn id(&self) -> String {
        self.customer_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}
