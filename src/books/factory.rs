use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use tokio::sync::RwLock;

use crate::books::domain::BookService;
use crate::books::domain::model::BookEntity;
use crate::books::domain::service::BookServiceImpl;
use crate::books::repository::BookRepository;
use crate::books::repository::mem_book_repository::MemBookRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

lazy_static! {
    // process-wide book table shared by every repository handle
    static ref BOOK_ROWS: Arc<RwLock<HashMap<String, BookEntity>>> =
        Arc::new(RwLock::new(HashMap::new()));
}

pub(crate) async fn create_book_repository(store: RepositoryStore) -> Box<dyn BookRepository> {
    match store {
        RepositoryStore::InMemory => {
            Box::new(MemBookRepository::new(BOOK_ROWS.clone()))
        }
    }
}

pub(crate) async fn create_book_service(config: &Configuration, store: RepositoryStore) -> Box<dyn BookService> {
    let book_repo = create_book_repository(store).await;
    let author_repo = crate::authors::factory::create_author_repository(store).await;
    Box::new(BookServiceImpl::new(config, book_repo, author_repo))
}
