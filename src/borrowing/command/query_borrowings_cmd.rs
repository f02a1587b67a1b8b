use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::borrowing::domain::BorrowingService;
use crate::borrowing::dto::BorrowingDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct QueryBorrowingsCommand {
    borrowing_service: Box<dyn BorrowingService>,
}

impl QueryBorrowingsCommand {
    pub(crate) fn new(borrowing_service: Box<dyn BorrowingService>) -> Self {
        Self {
            borrowing_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct QueryBorrowingsCommandRequest {}

#[derive(Debug, Serialize)]
pub(crate) struct QueryBorrowingsCommandResponse {
    pub records: Vec<BorrowingDto>,
}

impl QueryBorrowingsCommandResponse {
    pub fn new(records: Vec<BorrowingDto>) -> Self {
        Self {
            records,
        }
    }
}

#[async_trait]
impl Command<QueryBorrowingsCommandRequest, QueryBorrowingsCommandResponse> for QueryBorrowingsCommand {
    async fn execute(&self, _req: QueryBorrowingsCommandRequest) -> Result<QueryBorrowingsCommandResponse, CommandError> {
        self.borrowing_service.find_all_records().await
            .map_err(CommandError::from).map(QueryBorrowingsCommandResponse::new)
    }
}
