use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use tokio::sync::RwLock;

use crate::borrowing::domain::BorrowingService;
use crate::borrowing::domain::model::BorrowingEntity;
use crate::borrowing::domain::service::BorrowingServiceImpl;
use crate::borrowing::repository::BorrowingRepository;
use crate::borrowing::repository::mem_borrowing_repository::MemBorrowingRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

lazy_static! {
    // process-wide borrowing table shared by every repository handle
    static ref BORROWING_ROWS: Arc<RwLock<HashMap<String, BorrowingEntity>>> =
        Arc::new(RwLock::new(HashMap::new()));
}

pub(crate) async fn create_borrowing_repository(store: RepositoryStore) -> Box<dyn BorrowingRepository> {
    match store {
        RepositoryStore::InMemory => {
            Box::new(MemBorrowingRepository::new(BORROWING_ROWS.clone()))
        }
    }
}

pub(crate) async fn create_borrowing_service(config: &Configuration, store: RepositoryStore) -> Box<dyn BorrowingService> {
    let borrowing_repo = create_borrowing_repository(store).await;
    let customer_repo = crate::customers::factory::create_customer_repository(store).await;
    let book_repo = crate::books::factory::create_book_repository(store).await;
    Box::new(BorrowingServiceImpl::new(config, borrowing_repo, customer_repo, book_repo))
}
