use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::command::{Command, CommandError};
use crate::customers::domain::CustomerService;
use crate::customers::dto::CustomerDto;

pub(crate) struct QueryCustomersCommand {
    customer_service: Box<dyn CustomerService>,
}

impl QueryCustomersCommand {
    pub(crate) fn new(customer_service: Box<dyn CustomerService>) -> Self {
        Self {
            customer_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct QueryCustomersCommandRequest {}

#[derive(Debug, Serialize)]
pub(crate) struct QueryCustomersCommandResponse {
    pub customers: Vec<CustomerDto>,
}

impl QueryCustomersCommandResponse {
    pub fn new(customers: Vec<CustomerDto>) -> Self {
        Self {
            customers,
        }
    }
}

#[async_trait]
impl Command<QueryCustomersCommandRequest, QueryCustomersCommandResponse> for QueryCustomersCommand {
    async fn execute(&self, _req: QueryCustomersCommandRequest) -> Result<QueryCustomersCommandResponse, CommandError> {
        self.customer_service.find_all_customers().await
            .map_err(CommandError::from).map(QueryCustomersCommandResponse::new)
    }
}
