use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity, fails with NotFound if absent
    async fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity by id
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity by id, fails with NotFound if absent
    async fn delete(&self, id: &str) -> LibraryResult<usize>;

    // all rows for the entity type
    async fn find_all(&self) -> LibraryResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    InMemory,
}
