use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::domain::{require_non_blank, Identifiable};
use crate::core::library::LibraryResult;
use crate::utils::date::serializer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BorrowingDto {
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

impl BorrowingDto {
    pub fn new(customer_id: &str, book_id: &str, borrow_date: NaiveDate) -> BorrowingDto {
        BorrowingDto {
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

    pub fn validate(&self) -> LibraryResult<()> {
        require_non_blank("customer_id", self.customer_id.as_str())?;
        require_non_blank("book_id", self.book_id.as_str())?;
        Ok(())
    }
}

impl Identifiable for BorrowingDto {
    fn id(&self) -> String {
        self.record_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::borrowing::dto::BorrowingDto;

    #[tokio::test]
    async fn test_should_accept_valid_record() {
        let record = BorrowingDto::new(
            "customer-1", "book-1", NaiveDate::from_ymd_opt(2024, 6, 12).expect("date"));
        assert!(record.validate().is_ok());
        assert!(record.return_date.is_none());
    }

    #[tokio::test]
    async fn test_should_reject_blank_references() {
        let mut record = BorrowingDto::new(
            "customer-1", "book-1", NaiveDate::from_ymd_opt(2024, 6, 12).expect("date"));
        record.book_id = " ".to_string();
        assert!(record.validate().is_err());
    }
}
