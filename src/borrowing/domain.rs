use async_trait::async_trait;

use crate::borrowing::dto::BorrowingDto;
use crate::core::library::LibraryResult;

pub mod model;
pub mod service;

#[async_trait]
pub(crate) trait BorrowingService: Sync + Send {
    // flips the book to unavailable and creates the outstanding record as
    // one logical transaction
    async fn borrow_book(&self, record: &BorrowingDto) -> LibraryResult<BorrowingDto>;
    async fn update_borrowing(&self, record: &BorrowingDto) -> LibraryResult<BorrowingDto>;
    // deletes the record and flips the book back to available
    async fn return_book(&self, id: &str) -> LibraryResult<()>;
    async fn find_record_by_id(&self, id: &str) -> LibraryResult<BorrowingDto>;
    async fn find_all_records(&self) -> LibraryResult<Vec<BorrowingDto>>;
    async fn find_records_by_customer_id(&self, customer_id: &str) -> LibraryResult<Vec<BorrowingDto>>;
    async fn find_records_by_book_id(&self, book_id: &str) -> LibraryResult<Vec<BorrowingDto>>;
    // cascade used by customer removal; returns outstanding books first,
    // then deletes every record of the customer
    async fn remove_records_for_customer(&self, customer_id: &str) -> LibraryResult<usize>;
}
