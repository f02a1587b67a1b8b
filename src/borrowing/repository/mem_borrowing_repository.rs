use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::borrowing::domain::model::BorrowingEntity;
use crate::borrowing::repository::BorrowingRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

#[derive(Debug)]
pub struct MemBorrowingRepository {
    rows: Arc<RwLock<HashMap<String, BorrowingEntity>>>,
}

impl MemBorrowingRepository {
    pub(crate) fn new(rows: Arc<RwLock<HashMap<String, BorrowingEntity>>>) -> Self {
        Self {
            rows,
        }
    }
}

#[async_trait]
impl Repository<BorrowingEntity> for MemBorrowingRepository {
    async fn create(&self, entity: &BorrowingEntity) -> LibraryResult<usize> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(entity.record_id.as_str()) {
            return Err(LibraryError::duplicate_key(
                format!("borrowing record already exists for {}", entity.record_id).as_str()));
        }
        rows.insert(entity.record_id.to_string(), entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &BorrowingEntity) -> LibraryResult<usize> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(entity.record_id.as_str()) {
            Some(existing) => {
                let mut next = entity.clone();
                next.version = existing.version + 1;
                next.created_at = existing.created_at;
                next.updated_at = Utc::now().naive_utc();
                *existing = next;
                Ok(1)
            }
            None => Err(LibraryError::not_found(
                format!("borrowing record not found for {}", entity.record_id).as_str())),
        }
    }

    async fn get(&self, id: &str) -> LibraryResult<BorrowingEntity> {
        self.rows.read().await.get(id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("borrowing record not found for {}", id).as_str()))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        self.rows.write().await.remove(id).map(|_| 1)
            .ok_or_else(|| LibraryError::not_found(format!("borrowing record not found for {}", id).as_str()))
    }

    async fn find_all(&self) -> LibraryResult<Vec<BorrowingEntity>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }
}

#[async_trait]
impl BorrowingRepository for MemBorrowingRepository {
    async fn find_by_customer_id(&self, customer_id: &str) -> LibraryResult<Vec<BorrowingEntity>> {
        Ok(self.rows.read().await.values()
            .filter(|r| r.customer_id == customer_id).cloned().collect())
    }

    async fn find_by_book_id(&self, book_id: &str) -> LibraryResult<Vec<BorrowingEntity>> {
        Ok(self.rows.read().await.values()
            .filter(|r| r.book_id == book_id).cloned().collect())
    }

    async fn find_outstanding_by_book_id(&self, book_id: &str) -> LibraryResult<Vec<BorrowingEntity>> {
        Ok(self.rows.read().await.values()
            .filter(|r| r.book_id == book_id && r.is_outstanding()).cloned().collect())
    }
}
