use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::borrowing::domain::BorrowingService;
use crate::borrowing::dto::BorrowingDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBorrowingCommand {
    borrowing_service: Box<dyn BorrowingService>,
}

impl UpdateBorrowingCommand {
    pub(crate) fn new(borrowing_service: Box<dyn BorrowingService>) -> Self {
        Self {
            borrowing_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateBorrowingCommandRequest {
    // filled from the request path, not the body
    #[serde(default)]
    pub record_id: String,
    pub customer_id: String,
    pub book_id: String,
    pub borrow_date: NaiveDate,
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
}

impl UpdateBorrowingCommandRequest {
    pub fn new(record_id: &str, customer_id: &str, book_id: &str,
               borrow_date: NaiveDate, return_date: Option<NaiveDate>) -> Self {
        Self {
            record_id: record_id.to_string(),
            customer_id: customer_id.to_string(),
            book_id: book_id.to_string(),
            borrow_date,
            return_date,
        }
    }

    pub fn build_record(&self) -> BorrowingDto {
        BorrowingDto {
            record_id: self.record_id.to_string(),
            version: 0,
            customer_id: self.customer_id.to_string(),
            book_id: self.book_id.to_string(),
            borrow_date: self.borrow_date,
            return_date: self.return_date,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateBorrowingCommandResponse {
    pub record: BorrowingDto,
}

impl UpdateBorrowingCommandResponse {
    pub fn new(record: BorrowingDto) -> Self {
        Self {
            record,
        }
    }
}

#[async_trait]
impl Command<UpdateBorrowingCommandRequest, UpdateBorrowingCommandResponse> for UpdateBorrowingCommand {
    async fn execute(&self, req: UpdateBorrowingCommandRequest) -> Result<UpdateBorrowingCommandResponse, CommandError> {
        let record = req.build_record();
        self.borrowing_service.update_borrowing(&record).await
            .map_err(CommandError::from).map(UpdateBorrowingCommandResponse::new)
    }
}
