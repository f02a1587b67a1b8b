use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::command::{Command, CommandError};
use crate::customers::domain::CustomerService;
use crate::customers::dto::CustomerDto;

pub(crate) struct GetCustomerCommand {
    customer_service: Box<dyn CustomerService>,
}

impl GetCustomerCommand {
    pub(crate) fn new(customer_service: Box<dyn CustomerService>) -> Self {
        Self {
            customer_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetCustomerCommandRequest {
    pub(crate) customer_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetCustomerCommandResponse {
    pub customer: CustomerDto,
}

impl GetCustomerCommandResponse {
    pub fn new(customer: CustomerDto) -> Self {
        Self {
            customer,
        }
    }
}

#[async_trait]
impl Command<GetCustomerCommandRequest, GetCustomerCommandResponse> for GetCustomerCommand {
    async fn execute(&self, req: GetCustomerCommandRequest) -> Result<GetCustomerCommandResponse, CommandError> {
        self.customer_service.find_customer_by_id(req.customer_id.as_str()).await
            .map_err(CommandError::from).map(GetCustomerCommandResponse::new)
    }
}
