use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::command::{Command, CommandError};
use crate::customers::domain::CustomerService;
use crate::customers::dto::CustomerDto;

pub(crate) struct AddCustomerCommand {
    customer_service: Box<dyn CustomerService>,
}

impl AddCustomerCommand {
    pub(crate) fn new(customer_service: Box<dyn CustomerService>) -> Self {
        Self {
            customer_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddCustomerCommandRequest {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) phone_number: String,
    pub(crate) password: String,
    pub(crate) address: String,
}

impl AddCustomerCommandRequest {
    pub fn new(name: &str, email: &str, phone_number: &str,
               password: &str, address: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            phone_number: phone_number.to_string(),
            password: password.to_string(),
            address: address.to_string(),
        }
    }

    pub fn build_customer(&self) -> CustomerDto {
        CustomerDto::new(self.name.as_str(), self.email.as_str(), self.phone_number.as_str(),
                         self.password.as_str(), self.address.as_str())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddCustomerCommandResponse {
    pub customer: CustomerDto,
}

impl AddCustomerCommandResponse {
    pub fn new(customer: CustomerDto) -> Self {
        Self {
            customer,
        }
    }
}

#[async_trait]
impl Command<AddCustomerCommandRequest, AddCustomerCommandResponse> for AddCustomerCommand {
    async fn execute(&self, req: AddCustomerCommandRequest) -> Result<AddCustomerCommandResponse, CommandError> {
        let customer = req.build_customer();
        self.customer_service.add_customer(&customer).await
            .map_err(CommandError::from).map(AddCustomerCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::customers::command::add_customer_cmd::{AddCustomerCommand, AddCustomerCommandRequest};
    use crate::customers::factory;

    lazy_static! {
        static ref SUT_CMD: AsyncOnce<AddCustomerCommand> = AsyncOnce::new(async {
                let svc = factory::create_customer_service(&Configuration::new("test", false), RepositoryStore::InMemory).await;
                AddCustomerCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_add_customer() {
        let cmd = SUT_CMD.get().await.clone();

        let req = AddCustomerCommandRequest::new(
            "Customer 1", "cmd.add@example.com", "01088880001", "pw1", "Address 1");
        let res = cmd.execute(req).await.expect("should add customer");
        assert_eq!("cmd.add@example.com", res.customer.email.as_str());
        assert_ne!("pw1", res.customer.password.as_str());
    }

    #[tokio::test]
    async fn test_should_fail_add_of_invalid_customer() {
        let cmd = SUT_CMD.get().await.clone();

        let req = AddCustomerCommandRequest::new(
            "Customer 1", "not-an-email", "01088880002", "pw1", "Address 1");
        let res = cmd.execute(req).await;
        assert!(matches!(res, Err(CommandError::Validation { message: _, reason_code: _ })));
    }
}
