use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::borrowing::domain::BorrowingService;
use crate::borrowing::dto::BorrowingDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct BorrowBookCommand {
    borrowing_service: Box<dyn BorrowingService>,
}

impl BorrowBookCommand {
    pub(crate) fn new(borrowing_service: Box<dyn BorrowingService>) -> Self {
        Self {
            borrowing_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BorrowBookCommandRequest {
    pub(crate) customer_id: String,
    pub(crate) book_id: String,
    pub(crate) borrow_date: NaiveDate,
}

impl BorrowBookCommandRequest {
    pub fn new(customer_id: &str, book_id: &str, borrow_date: NaiveDate) -> Self {
        Self {
            customer_id: customer_id.to_string(),
            book_id: book_id.to_string(),
            borrow_date,
        }
    }

    pub fn build_record(&self) -> BorrowingDto {
        BorrowingDto::new(self.customer_id.as_str(), self.book_id.as_str(), self.borrow_date)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct BorrowBookCommandResponse {
    pub record: BorrowingDto,
}

impl BorrowBookCommandResponse {
    pub fn new(record: BorrowingDto) -> Self {
        Self {
            record,
        }
    }
}

#[async_trait]
impl Command<BorrowBookCommandRequest, BorrowBookCommandResponse> for BorrowBookCommand {
    async fn execute(&self, req: BorrowBookCommandRequest) -> Result<BorrowBookCommandResponse, CommandError> {
        let record = req.build_record();
        self.borrowing_service.borrow_book(&record).await
            .map_err(CommandError::from).map(BorrowBookCommandResponse::new)
    }
}
