use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::borrowing::domain::BorrowingService;
use crate::borrowing::dto::BorrowingDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetBorrowingCommand {
    borrowing_service: Box<dyn BorrowingService>,
}

impl GetBorrowingCommand {
    pub(crate) fn new(borrowing_service: Box<dyn BorrowingService>) -> Self {
        Self {
            borrowing_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetBorrowingCommandRequest {
    pub(crate) record_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetBorrowingCommandResponse {
    pub record: BorrowingDto,
}

impl GetBorrowingCommandResponse {
    pub fn new(record: BorrowingDto) -> Self {
        Self {
            record,
        }
    }
}

#[async_trait]
impl Command<GetBorrowingCommandRequest, GetBorrowingCommandResponse> for GetBorrowingCommand {
    async fn execute(&self, req: GetBorrowingCommandRequest) -> Result<GetBorrowingCommandResponse, CommandError> {
        self.borrowing_service.find_record_by_id(req.record_id.as_str()).await
            .map_err(CommandError::from).map(GetBorrowingCommandResponse::new)
    }
}
