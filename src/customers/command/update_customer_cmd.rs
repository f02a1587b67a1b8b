use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::core::command::{Command, CommandError};
use crate::customers::domain::CustomerService;
use crate::customers::dto::CustomerDto;

pub(crate) struct UpdateCustomerCommand {
    customer_service: Box<dyn CustomerService>,
}

impl UpdateCustomerCommand {
    pub(crate) fn new(customer_service: Box<dyn CustomerService>) -> Self {
        Self {
            customer_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateCustomerCommandRequest {
    // filled from the request path, not the body
    #[serde(default)]
    pub customer_id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub address: String,
}

impl UpdateCustomerCommandRequest {
    pub fn new(customer_id: &str, name: &str, email: &str, phone_number: &str,
               password: &str, address: &str) -> Self {
        Self {
            customer_id: customer_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone_number: phone_number.to_string(),
            password: password.to_string(),
            address: address.to_string(),
        }
    }

    pub fn build_customer(&self) -> CustomerDto {
        CustomerDto {
            customer_id: self.customer_id.to_string(),
            version: 0,
            name: self.name.to_string(),
            email: self.email.to_string(),
            phone_number: self.phone_number.to_string(),
            password: self.password.to_string(),
            address: self.address.to_string(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateCustomerCommandResponse {
    pub customer: CustomerDto,
}

impl UpdateCustomerCommandResponse {
    pub fn new(customer: CustomerDto) -> Self {
        Self {
            customer,
        }
    }
}

#[async_trait]
impl Command<UpdateCustomerCommandRequest, UpdateCustomerCommandResponse> for UpdateCustomerCommand {
    async fn execute(&self, req: UpdateCustomerCommandRequest) -> Result<UpdateCustomerCommandResponse, CommandError> {
        let customer = req.build_customer();
        self.customer_service.update_customer(&customer).await
            .map_err(CommandError::from).map(UpdateCustomerCommandResponse::new)
    }
}
