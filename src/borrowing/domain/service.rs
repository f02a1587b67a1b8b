use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lazy_static::lazy_static;

use crate::books::repository::BookRepository;
use crate::borrowing::domain::BorrowingService;
use crate::borrowing::domain::model::BorrowingEntity;
use crate::borrowing::dto::BorrowingDto;
use crate::borrowing::repository::BorrowingRepository;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::customers::repository::CustomerRepository;

lazy_static! {
    // per-book critical sections so racing borrow/return calls on the same
    // book serialize instead of interleaving their two writes
    static ref BOOK_LOCKS: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>> =
        Mutex::new(HashMap::new());
}

fn book_lock(book_id: &str) -> Arc<tokio::sync::Mutex<()>> {
    let mut locks = BOOK_LOCKS.lock().unwrap_or_else(|e| e.into_inner());
    locks.entry(book_id.to_string())
        .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
        .clone()
}

// called when a book is deleted so the registry stays bounded by the
// number of live books
pub(crate) fn discard_book_lock(book_id: &str) {
    let mut locks = BOOK_LOCKS.lock().unwrap_or_else(|e| e.into_inner());
    locks.remove(book_id);
}

pub(crate) struct BorrowingServiceImpl {
    borrowing_repository: Box<dyn BorrowingRepository>,
    customer_repository: Box<dyn CustomerRepository>,
    book_repository: Box<dyn BookRepository>,
}

impl BorrowingServiceImpl {
    pub(crate) fn new(_config: &Configuration, borrowing_repository: Box<dyn BorrowingRepository>,
                      customer_repository: Box<dyn CustomerRepository>,
                      book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            borrowing_repository,
            customer_repository,
            book_repository,
        }
    }

    async fn set_book_available(&self, book_id: &str, available: bool) -> LibraryResult<()> {
        let mut book = self.book_repository.get(book_id).await?;
        book.available = available;
        self.book_repository.update(&book).await.map(|_| ())
    }
}

#[async_trait]
impl BorrowingService for BorrowingServiceImpl {
    async fn borrow_book(&self, record: &BorrowingDto) -> LibraryResult<BorrowingDto> {
        record.validate()?;
        let _customer = self.customer_repository.get(record.customer_id.as_str()).await?;

        let lock = book_lock(record.book_id.as_str());
        let _guard = lock.lock().await;

        let book = self.book_repository.get(record.book_id.as_str()).await?;
        if !book.available {
            return Err(LibraryError::conflict(
                format!("book {} is already borrowed", book.book_id).as_str()));
        }

        self.set_book_available(record.book_id.as_str(), false).await?;
        let mut entity = BorrowingEntity::from(record);
        entity.return_date = None;
        if let Err(err) = self.borrowing_repository.create(&entity).await {
            // undo the flag flip so the book is not stranded unavailable
            // without an outstanding record
            self.set_book_available(record.book_id.as_str(), true).await?;
            return Err(err);
        }
        Ok(BorrowingDto::from(&entity))
    }

    async fn update_borrowing(&self, record: &BorrowingDto) -> LibraryResult<BorrowingDto> {
        record.validate()?;
        let _existing = self.borrowing_repository.get(record.record_id.as_str()).await?;
        let _customer = self.customer_repository.get(record.customer_id.as_str()).await?;
        let book = self.book_repository.get(record.book_id.as_str()).await?;
        // updates are only accepted against a book that is currently checked
        // out; the flag itself is left untouched
        if book.available {
            return Err(LibraryError::bad_request(
                format!("book {} is not borrowed", book.book_id).as_str()));
        }
        let entity = BorrowingEntity::from(record);
        self.borrowing_repository.update(&entity).await?;
        Ok(BorrowingDto::from(&entity))
    }

    async fn return_book(&self, id: &str) -> LibraryResult<()> {
        let record = self.borrowing_repository.get(id).await?;

        let lock = book_lock(record.book_id.as_str());
        let _guard = lock.lock().await;

        let book = self.book_repository.get(record.book_id.as_str()).await?;
        self.set_book_available(record.book_id.as_str(), true).await?;
        if let Err(err) = self.borrowing_repository.delete(id).await {
            self.set_book_available(record.book_id.as_str(), book.available).await?;
            return Err(err);
        }
        Ok(())
    }

    async fn find_record_by_id(&self, id: &str) -> LibraryResult<BorrowingDto> {
        self.borrowing_repository.get(id).await.map(|r| BorrowingDto::from(&r))
    }

    async fn find_all_records(&self) -> LibraryResult<Vec<BorrowingDto>> {
        let records = self.borrowing_repository.find_all().await?;
        Ok(records.iter().map(BorrowingDto::from).collect())
    }

    async fn find_records_by_customer_id(&self, customer_id: &str) -> LibraryResult<Vec<BorrowingDto>> {
        let records = self.borrowing_repository.find_by_customer_id(customer_id).await?;
        Ok(records.iter().map(BorrowingDto::from).collect())
    }

    async fn find_records_by_book_id(&self, book_id: &str) -> LibraryResult<Vec<BorrowingDto>> {
        let records = self.borrowing_repository.find_by_book_id(book_id).await?;
        Ok(records.iter().map(BorrowingDto::from).collect())
    }

    async fn remove_records_for_customer(&self, customer_id: &str) -> LibraryResult<usize> {
        let records = self.borrowing_repository.find_by_customer_id(customer_id).await?;
        for record in records.iter() {
            let lock = book_lock(record.book_id.as_str());
            let _guard = lock.lock().await;
            if record.is_outstanding() {
                self.set_book_available(record.book_id.as_str(), true).await?;
            }
            self.borrowing_repository.delete(record.record_id.as_str()).await?;
        }
        Ok(records.len())
    }
}

impl From<&BorrowingEntity> for BorrowingDto {
    fn from(other: &BorrowingEntity) -> BorrowingDto {
        BorrowingDto {
            record_id: other.record_id.to_string(),
            version: other.version,
            customer_id: other.customer_id.to_string(),
            book_id: other.book_id.to_string(),
            borrow_date: other.borrow_date,
            return_date: other.return_date,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BorrowingDto> for BorrowingEntity {
    fn from(other: &BorrowingDto) -> BorrowingEntity {
        BorrowingEntity {
            record_id: other.record_id.to_string(),
            version: other.version,
            customer_id: other.customer_id.to_string(),
            book_id: other.book_id.to_string(),
            borrow_date: other.borrow_date,
            return_date: other.return_date,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
