use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::customers::domain::model::CustomerEntity;
use crate::customers::repository::CustomerRepository;

#[derive(Debug)]
pub struct MemCustomerRepository {
    rows: Arc<RwLock<HashMap<String, CustomerEntity>>>,
}

impl MemCustomerRepository {
    pub(crate) fn new(rows: Arc<RwLock<HashMap<String, CustomerEntity>>>) -> Self {
        Self {
            rows,
        }
    }

    fn check_unique_contact(rows: &HashMap<String, CustomerEntity>, entity: &CustomerEntity) -> LibraryResult<()> {
        if rows.values().any(|c| c.email == entity.email && c.customer_id != entity.customer_id) {
            return Err(LibraryError::duplicate_key(
                format!("email {} is already taken", entity.email).as_str()));
        }
        if rows.values().any(|c| c.phone_number == entity.phone_number && c.customer_id != entity.customer_id) {
            return Err(LibraryError::duplicate_key(
                format!("phone number {} is already taken", entity.phone_number).as_str()));
        }
        Ok(())
    }
}

#[async_trait]
impl Repository<CustomerEntity> for MemCustomerRepository {
    async fn create(&self, entity: &CustomerEntity) -> LibraryResult<usize> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(entity.customer_id.as_str()) {
            return Err(LibraryError::duplicate_key(
                format!("customer already exists for {}", entity.customer_id).as_str()));
        }
        Self::check_unique_contact(&rows, entity)?;
        rows.insert(entity.customer_id.to_string(), entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &CustomerEntity) -> LibraryResult<usize> {
        let mut rows = self.rows.write().await;
        // absence wins over a contact clash
        let existing = match rows.get(entity.customer_id.as_str()) {
            Some(existing) => existing.clone(),
            None => return Err(LibraryError::not_found(
                format!("customer not found for {}", entity.customer_id).as_str())),
        };
        Self::check_unique_contact(&rows, entity)?;
        let mut next = entity.clone();
        next.version = existing.version + 1;
        next.created_at = existing.created_at;
        next.updated_at = Utc::now().naive_utc();
        rows.insert(entity.customer_id.to_string(), next);
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<CustomerEntity> {
        self.rows.read().await.get(id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("customer not found for {}", id).as_str()))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        self.rows.write().await.remove(id).map(|_| 1)
            .ok_or_else(|| LibraryError::not_found(format!("customer not found for {}", id).as_str()))
    }

    async fn find_all(&self) -> LibraryResult<Vec<CustomerEntity>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }
}

impl CustomerRepository for MemCustomerRepository {}
