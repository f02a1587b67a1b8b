use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use tokio::sync::RwLock;

use crate::authors::domain::AuthorService;
use crate::authors::domain::model::AuthorEntity;
use crate::authors::domain::service::AuthorServiceImpl;
use crate::authors::repository::AuthorRepository;
use crate::authors::repository::mem_author_repository::MemAuthorRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

lazy_static! {
    // process-wide author table shared by every repository handle
    static ref AUTHOR_ROWS: Arc<RwLock<HashMap<String, AuthorEntity>>> =
        Arc::new(RwLock::new(HashMap::new()));
}

pub(crate) async fn create_author_repository(store: RepositoryStore) -> Box<dyn AuthorRepository> {
    match store {
        RepositoryStore::InMemory => {
            Box::new(MemAuthorRepository::new(AUTHOR_ROWS.clone()))
        }
    }
}

pub(crate) async fn create_author_service(config: &Configuration, store: RepositoryStore) -> Box<dyn AuthorService> {
    let author_repo = create_author_repository(store).await;
    let book_service = crate::books::factory::create_book_service(config, store).await;
    Box::new(AuthorServiceImpl::new(config, author_repo, book_service))
}
