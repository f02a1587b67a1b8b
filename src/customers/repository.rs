pub mod mem_customer_repository;

use crate::core::repository::Repository;
use crate::customers::domain::model::CustomerEntity;

pub(crate) trait CustomerRepository: Repository<CustomerEntity> {}
