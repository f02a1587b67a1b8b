use async_trait::async_trait;

use crate::authors::dto::AuthorDto;
use crate::core::library::LibraryResult;

pub mod model;
pub mod service;

#[async_trait]
pub(crate) trait AuthorService: Sync + Send {
    async fn add_author(&self, author: &AuthorDto) -> LibraryResult<()>;
    async fn update_author(&self, author: &AuthorDto) -> LibraryResult<()>;
    // removes the author and its books; fails with Conflict while any of the
    // author's books is checked out
    async fn remove_author(&self, id: &str) -> LibraryResult<()>;
    async fn find_author_by_id(&self, id: &str) -> LibraryResult<AuthorDto>;
    async fn find_all_authors(&self) -> LibraryResult<Vec<AuthorDto>>;
}
