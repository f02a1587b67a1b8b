use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

#[derive(Debug)]
pub struct MemBookRepository {
    rows: Arc<RwLock<HashMap<String, BookEntity>>>,
}

impl MemBookRepository {
    pub(crate) fn new(rows: Arc<RwLock<HashMap<String, BookEntity>>>) -> Self {
        Self {
            rows,
        }
    }

    fn check_unique_isbn(rows: &HashMap<String, BookEntity>, entity: &BookEntity) -> LibraryResult<()> {
        if rows.values().any(|b| b.isbn == entity.isbn && b.book_id != entity.book_id) {
            return Err(LibraryError::duplicate_key(
                format!("isbn {} is already taken", entity.isbn).as_str()));
        }
        Ok(())
    }
}

#[async_trait]
impl Repository<BookEntity> for MemBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(entity.book_id.as_str()) {
            return Err(LibraryError::duplicate_key(
                format!("book already exists for {}", entity.book_id).as_str()));
        }
        Self::check_unique_isbn(&rows, entity)?;
        rows.insert(entity.book_id.to_string(), entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut rows = self.rows.write().await;
        // absence wins over an isbn clash
        let existing = match rows.get(entity.book_id.as_str()) {
            Some(existing) => existing.clone(),
            None => return Err(LibraryError::not_found(
                format!("book not found for {}", entity.book_id).as_str())),
        };
        Self::check_unique_isbn(&rows, entity)?;
        let mut next = entity.clone();
        next.version = existing.version + 1;
        next.created_at = existing.created_at;
        next.updated_at = Utc::now().naive_utc();
        rows.insert(entity.book_id.to_string(), next);
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.rows.read().await.get(id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        self.rows.write().await.remove(id).map(|_| 1)
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }
}

#[async_trait]
impl BookRepository for MemBookRepository {
    async fn find_by_title_containing(&self, title: &str) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.rows.read().await.values()
            .filter(|b| b.title.contains(title)).cloned().collect())
    }

    async fn find_by_author_id(&self, author_id: &str) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.rows.read().await.values()
            .filter(|b| b.author_id == author_id).cloned().collect())
    }

    async fn find_by_isbn(&self, isbn: &str) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.rows.read().await.values()
            .filter(|b| b.isbn == isbn).cloned().collect())
    }
}
