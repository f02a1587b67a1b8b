pub mod mem_borrowing_repository;

use async_trait::async_trait;

use crate::borrowing::domain::model::BorrowingEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

#[async_trait]
pub(crate) trait BorrowingRepository: Repository<BorrowingEntity> {
    async fn find_by_customer_id(&self, customer_id: &str) -> LibraryResult<Vec<BorrowingEntity>>;
    async fn find_by_book_id(&self, book_id: &str) -> LibraryResult<Vec<BorrowingEntity>>;
    // outstanding means no return date set
    async fn find_outstanding_by_book_id(&self, book_id: &str) -> LibraryResult<Vec<BorrowingEntity>>;
}
