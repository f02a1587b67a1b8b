use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BorrowingEntity is the stored row for a borrowing record; a missing
// `return_date` marks the record as outstanding.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BorrowingEntity {
    pub record_id: String,
    pub version: i64,
    pub customer_id: String,
    pub book_id: String,
    pub borrow_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BorrowingEntity {
    pub fn new(customer_id: &str, book_id: &str, borrow_date: NaiveDate) -> Self {
        Self {
            record_id: Uuid::new_v4().to_string(),
            version: 0,
            customer_id: customer_id.to_string(),
            book_id: book_id.to_string(),
            borrow_date,
            return_date: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn is_outstanding(&self) -> bool {
        self.return_date.is_none()
    }
}

impl Identifiable for BorrowingEntity {
    fn id(&self) -> String {
        self.record_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}
