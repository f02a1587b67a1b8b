use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::command::{Command, CommandError};
use crate::customers::domain::CustomerService;

pub(crate) struct RemoveCustomerCommand {
    customer_service: Box<dyn CustomerService>,
}

impl RemoveCustomerCommand {
    pub(crate) fn new(customer_service: Box<dyn CustomerService>) -> Self {
        Self {
            customer_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveCustomerCommandRequest {
    pub(crate) customer_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveCustomerCommandResponse {}

impl RemoveCustomerCommandResponse {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command<RemoveCustomerCommandRequest, RemoveCustomerCommandResponse> for RemoveCustomerCommand {
    async fn execute(&self, req: RemoveCustomerCommandRequest) -> Result<RemoveCustomerCommandResponse, CommandError> {
        self.customer_service.remove_customer(req.customer_id.as_str()).await
            .map_err(CommandError::from).map(|_| RemoveCustomerCommandResponse::new())
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
    use crate::customers::command::remove_customer_cmd::{RemoveCustomerCommand, RemoveCustomerCommandRequest};
    use crate::customers::factory;

    lazy_static! {
        static ref ADD_CMD: AsyncOnce<AddCustomerCommand> = AsyncOnce::new(async {
                let svc = factory::create_customer_service(&Configuration::new("test", false), RepositoryStore::InMemory).await;
                AddCustomerCommand::new(svc)
            });
        static ref REMOVE_CMD: AsyncOnce<RemoveCustomerCommand> = AsyncOnce::new(async {
                let svc = factory::create_customer_service(&Configuration::new("test", false), RepositoryStore::InMemory).await;
                RemoveCustomerCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_remove_customer() {
        let add_cmd = ADD_CMD.get().await.clone();
        let remove_cmd = REMOVE_CMD.get().await.clone();

        let added = add_cmd.execute(AddCustomerCommandRequest::new(
            "Customer 1", "cmd.remove@example.com", "01088880040", "pw1", "Address 1"))
            .await.expect("should add customer");

        let _ = remove_cmd.execute(RemoveCustomerCommandRequest { customer_id: added.customer.customer_id })
            .await.expect("should remove customer");
    }

    #[tokio::test]
    async fn test_should_fail_remove_of_unknown_customer() {
        let remove_cmd = REMOVE_CMD.get().await.clone();

        let res = remove_cmd.execute(RemoveCustomerCommandRequest { customer_id: "unknown".to_string() }).await;
        assert!(matches!(res, Err(CommandError::NotFound { message: _ })));
    }
}
