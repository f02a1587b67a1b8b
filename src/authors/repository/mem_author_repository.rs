use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::authors::domain::model::AuthorEntity;
use crate::authors::repository::AuthorRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

#[derive(Debug)]
pub struct MemAuthorRepository {
    rows: Arc<RwLock<HashMap<String, AuthorEntity>>>,
}

impl MemAuthorRepository {
    pub(crate) fn new(rows: Arc<RwLock<HashMap<String, AuthorEntity>>>) -> Self {
        Self {
            rows,
        }
    }
}

#[async_trait]
impl Repository<AuthorEntity> for MemAuthorRepository {
    async fn create(&self, entity: &AuthorEntity) -> LibraryResult<usize> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(entity.author_id.as_str()) {
            return Err(LibraryError::duplicate_key(
                format!("author already exists for {}", entity.author_id).as_str()));
        }
        rows.insert(entity.author_id.to_string(), entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &AuthorEntity) -> LibraryResult<usize> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(entity.author_id.as_str()) {
            Some(existing) => {
                let mut next = entity.clone();
                next.version = existing.version + 1;
                next.created_at = existing.created_at;
                next.updated_at = Utc::now().naive_utc();
                *existing = next;
                Ok(1)
            }
            None => Err(LibraryError::not_found(
                format!("author not found for {}", entity.author_id).as_str())),
        }
    }

    async fn get(&self, id: &str) -> LibraryResult<AuthorEntity> {
        self.rows.read().await.get(id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("author not found for {}", id).as_str()))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        self.rows.write().await.remove(id).map(|_| 1)
            .ok_or_else(|| LibraryError::not_found(format!("author not found for {}", id).as_str()))
    }

    async fn find_all(&self) -> LibraryResult<Vec<AuthorEntity>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }
}

impl AuthorRepository for MemAuthorRepository {}
