use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::borrowing::domain::BorrowingService;
use crate::borrowing::dto::BorrowingDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct SearchBorrowingsCommand {
    borrowing_service: Box<dyn BorrowingService>,
}

impl SearchBorrowingsCommand {
    pub(crate) fn new(borrowing_service: Box<dyn BorrowingService>) -> Self {
        Self {
            borrowing_service,
        }
    }
}

// Filters are tried in order: customer id, then book id. At least one must be
// supplied.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchBorrowingsCommandRequest {
    pub(crate) customer_id: Option<String>,
    pub(crate) book_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchBorrowingsCommandResponse {
    pub records: Vec<BorrowingDto>,
}

impl SearchBorrowingsCommandResponse {
    pub fn new(records: Vec<BorrowingDto>) -> Self {
        Self {
            records,
        }
    }
}

#[async_trait]
impl Command<SearchBorrowingsCommandRequest, SearchBorrowingsCommandResponse> for SearchBorrowingsCommand {
    async fn execute(&self, req: SearchBorrowingsCommandRequest) -> Result<SearchBorrowingsCommandResponse, CommandError> {
        let res = if let Some(customer_id) = &req.customer_id {
            self.borrowing_service.find_records_by_customer_id(customer_id.as_str()).await
        } else if let Some(book_id) = &req.book_id {
            self.borrowing_service.find_records_by_book_id(book_id.as_str()).await
        } else {
            return Err(CommandError::BadRequest {
                message: "search requires one of customer_id or book_id".to_string(),
            });
        };
        res.map_err(CommandError::from).map(SearchBorrowingsCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::borrowing::command::search_borrowings_cmd::{SearchBorrowingsCommand, SearchBorrowingsCommandRequest};
    use crate::borrowing::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    lazy_static! {
        static ref SEARCH_CMD: AsyncOnce<SearchBorrowingsCommand> = AsyncOnce::new(async {
                let svc = factory::create_borrowing_service(&Configuration::new("test", false), RepositoryStore::InMemory).await;
                SearchBorrowingsCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_search_by_each_filter() {
        let search_cmd = SEARCH_CMD.get().await.clone();

        let by_customer = search_cmd.execute(SearchBorrowingsCommandRequest {
            customer_id: Some("no-such-customer".to_string()),
            ..Default::default()
        }).await.expect("should search by customer");
        assert!(by_customer.records.is_empty());

        let by_book = search_cmd.execute(SearchBorrowingsCommandRequest {
            book_id: Some("no-such-book".to_string()),
            ..Default::default()
        }).await.expect("should search by book");
        assert!(by_book.records.is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_search_without_filters() {
        let search_cmd = SEARCH_CMD.get().await.clone();

        let res = search_cmd.execute(SearchBorrowingsCommandRequest::default()).await;
        assert!(matches!(res, Err(CommandError::BadRequest { message: _ })));
    }
}
