use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use tokio::sync::RwLock;

use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::customers::domain::CustomerService;
use crate::customers::domain::model::CustomerEntity;
use crate::customers::domain::service::CustomerServiceImpl;
use crate::customers::repository::CustomerRepository;
use crate::customers::repository::mem_customer_repository::MemCustomerRepository;
use crate::utils::hash::create_password_hasher;

lazy_static! {
    // process-wide customer table shared by every repository handle
    static ref CUSTOMER_ROWS: Arc<RwLock<HashMap<String, CustomerEntity>>> =
        Arc::new(RwLock::new(HashMap::new()));
}

pub(crate) async fn create_customer_repository(store: RepositoryStore) -> Box<dyn CustomerRepository> {
    match store {
        RepositoryStore::InMemory => {
            Box::new(MemCustomerRepository::new(CUSTOMER_ROWS.clone()))
        }
    }
}

pub(crate) async fn create_customer_service(config: &Configuration, store: RepositoryStore) -> Box<dyn CustomerService> {
    let customer_repo = create_customer_repository(store).await;
    let borrowing_svc = crate::borrowing::factory::create_borrowing_service(config, store).await;
    Box::new(CustomerServiceImpl::new(config, customer_repo, borrowing_svc, create_password_hasher()))
}
