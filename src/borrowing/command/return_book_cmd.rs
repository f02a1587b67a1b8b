use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::borrowing::domain::BorrowingService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ReturnBookCommand {
    borrowing_service: Box<dyn BorrowingService>,
}

impl ReturnBookCommand {
    pub(crate) fn new(borrowing_service: Box<dyn BorrowingService>) -> Self {
        Self {
            borrowing_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnBookCommandRequest {
    pub(crate) record_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReturnBookCommandResponse {}

impl ReturnBookCommandResponse {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.borrowing_service.return_book(req.record_id.as_str()).await
            .map_err(CommandError::from).map(|_| ReturnBookCommandResponse::new())
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use chrono::NaiveDate;
    use lazy_static::lazy_static;
    use crate::authors::domain::AuthorService;
    use crate::authors::dto::AuthorDto;
    use crate::books::domain::BookService;
    use crate::books::dto::BookDto;
    use crate::borrowing::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
    use crate::borrowing::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::borrowing::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::customers::domain::CustomerService;
    use crate::customers::dto::CustomerDto;

    lazy_static! {
        static ref BORROW_CMD: AsyncOnce<BorrowBookCommand> = AsyncOnce::new(async {
                let svc = factory::create_borrowing_service(&Configuration::new("test", false), RepositoryStore::InMemory).await;
                BorrowBookCommand::new(svc)
            });
        static ref RETURN_CMD: AsyncOnce<ReturnBookCommand> = AsyncOnce::new(async {
                let svc = factory::create_borrowing_service(&Configuration::new("test", false), RepositoryStore::InMemory).await;
                ReturnBookCommand::new(svc)
            });
        static ref AUTHOR_SVC: AsyncOnce<Box<dyn AuthorService>> = AsyncOnce::new(async {
                crate::authors::factory::create_author_service(&Configuration::new("test", false), RepositoryStore::InMemory).await
            });
        static ref BOOK_SVC: AsyncOnce<Box<dyn BookService>> = AsyncOnce::new(async {
                crate::books::factory::create_book_service(&Configuration::new("test", false), RepositoryStore::InMemory).await
            });
        static ref CUSTOMER_SVC: AsyncOnce<Box<dyn CustomerService>> = AsyncOnce::new(async {
                crate::customers::factory::create_customer_service(&Configuration::new("test", false), RepositoryStore::InMemory).await
            });
    }

    #[tokio::test]
    async fn test_should_run_return_book() {
        let borrow_cmd = BORROW_CMD.get().await.clone();
        let return_cmd = RETURN_CMD.get().await.clone();
        let author_svc = AUTHOR_SVC.get().await.clone();
        let book_svc = BOOK_SVC.get().await.clone();
        let customer_svc = CUSTOMER_SVC.get().await.clone();

        let author = AuthorDto::new("Author 1", NaiveDate::from_ymd_opt(1981, 1, 1).expect("date"), "Nationality 1");
        let _ = author_svc.add_author(&author).await.expect("should add author");
        let book = BookDto::new("isbn-cmd-return", "title", author.author_id.as_str(),
                                NaiveDate::from_ymd_opt(2001, 1, 1).expect("date"), "Genre 1");
        let _ = book_svc.add_book(&book).await.expect("should add book");
        let customer = CustomerDto::new("Customer 1", "cmd.return@example.com",
                                        "01066660020", "pw1", "Address 1");
        let _ = customer_svc.add_customer(&customer).await.expect("should add customer");

        let borrowed = borrow_cmd.execute(BorrowBookCommandRequest::new(
            customer.customer_id.as_str(), book.book_id.as_str(),
            NaiveDate::from_ymd_opt(2024, 6, 12).expect("date")))
            .await.expect("should borrow book");

        let _ = return_cmd.execute(ReturnBookCommandRequest { record_id: borrowed.record.record_id })
            .await.expect("should return book");

        let loaded = book_svc.find_book_by_id(book.book_id.as_str()).await.expect("should return book");
        assert!(loaded.available);
    }

    #[tokio::test]
    async fn test_should_fail_return_of_unknown_record() {
        let return_cmd = RETURN_CMD.get().await.clone();

        let res = return_cmd.execute(ReturnBookCommandRequest { record_id: "unknown".to_string() }).await;
        assert!(matches!(res, Err(CommandError::NotFound { message: _ })));
    }
}
