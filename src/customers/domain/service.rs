use async_trait::async_trait;

use crate::borrowing::domain::BorrowingService;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::customers::domain::CustomerService;
use crate::customers::domain::model::CustomerEntity;
use crate::customers::dto::CustomerDto;
use crate::customers::repository::CustomerRepository;
use crate::utils::hash::PasswordHasher;

pub(crate) struct CustomerServiceImpl {
    customer_repository: Box<dyn CustomerRepository>,
    borrowing_service: Box<dyn BorrowingService>,
    password_hasher: Box<dyn PasswordHasher>,
}

impl CustomerServiceImpl {
    pub(crate) fn new(_config: &Configuration, customer_repository: Box<dyn CustomerRepository>,
                      borrowing_service: Box<dyn BorrowingService>,
                      password_hasher: Box<dyn PasswordHasher>) -> Self {
        Self {
            customer_repository,
            borrowing_service,
            password_hasher,
        }
    }
}

#[async_trait]
impl CustomerService for CustomerServiceImpl {
    async fn add_customer(&self, customer: &CustomerDto) -> LibraryResult<CustomerDto> {
        customer.validate()?;
        let mut entity = CustomerEntity::from(customer);
        entity.password = self.password_hasher.hash(customer.password.as_str());
        self.customer_repository.create(&entity).await?;
        Ok(CustomerDto::from(&entity))
    }

    async fn update_customer(&self, customer: &CustomerDto) -> LibraryResult<CustomerDto> {
        customer.validate()?;
        let _existing = self.customer_repository.get(customer.customer_id.as_str()).await?;
        let mut entity = CustomerEntity::from(customer);
        // the payload carries the plaintext; only the digest is stored
        entity.password = self.password_hasher.hash(customer.password.as_str());
        self.customer_repository.update(&entity).await?;
        Ok(CustomerDto::from(&entity))
    }

    async fn remove_customer(&self, id: &str) -> LibraryResult<()> {
        let _customer = self.customer_repository.get(id).await?;
        let _ = self.borrowing_service.remove_records_for_customer(id).await?;
        self.customer_repository.delete(id).await.map(|_| ())
    }

    async fn find_customer_by_id(&self, id: &str) -> LibraryResult<CustomerDto> {
        self.customer_repository.get(id).await.map(|c| CustomerDto::from(&c))
    }

    async fn find_all_customers(&self) -> LibraryResult<Vec<CustomerDto>> {
        let customers = self.customer_repository.find_all().await?;
        Ok(customers.iter().map(CustomerDto::from).collect())
    }
}

impl From<&CustomerEntity> for CustomerDto {
    fn from(other: &CustomerEntity) -> CustomerDto {
        CustomerDto {
            customer_id: other.customer_id.to_string(),
            version: other.version,
            name: other.name.to_string(),
            email: other.email.to_string(),
            phone_number: other.phone_number.to_string(),
            password: other.password.to_string(),
            address: other.address.to_string(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&CustomerDto> for CustomerEntity {
    fn from(other: &CustomerDto) -> CustomerEntity {
        CustomerEntity {
            customer_id: other.customer_id.to_string(),
            version: other.version,
            name: other.name.to_string(),
            email: other.email.to_string(),
            phone_number: other.phone_number.to_string(),
            password: other.password.to_string(),
            address: other.address.to_string(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
