use async_trait::async_trait;

use crate::core::library::LibraryResult;
use crate::customers::dto::CustomerDto;

pub mod model;
pub mod service;

#[async_trait]
pub(crate) trait CustomerService: Sync + Send {
    // the stored password is always the digest of the supplied plaintext
    async fn add_customer(&self, customer: &CustomerDto) -> LibraryResult<CustomerDto>;
    async fn update_customer(&self, customer: &CustomerDto) -> LibraryResult<CustomerDto>;
    // removes the customer and its borrowing records, returning any
    // outstanding books first
    async fn remove_customer(&self, id: &str) -> LibraryResult<()>;
    async fn find_customer_by_id(&self, id: &str) -> LibraryResult<CustomerDto>;
    async fn find_all_customers(&self) -> LibraryResult<Vec<CustomerDto>>;
}
