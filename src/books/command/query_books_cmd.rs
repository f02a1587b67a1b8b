use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::books::domain::BookService;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct QueryBooksCommand {
    book_service: Box<dyn BookService>,
}

impl QueryBooksCommand {
    pub(crate) fn new(book_service: Box<dyn BookService>) -> Self {
        Self {
            book_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct QueryBooksCommandRequest {}

#[derive(Debug, Serialize)]
pub(crate) struct QueryBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl QueryBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<QueryBooksCommandRequest, QueryBooksCommandResponse> for QueryBooksCommand {
    async fn execute(&self, _req: QueryBooksCommandRequest) -> Result<QueryBooksCommandResponse, CommandError> {
        self.book_service.find_all_books().await
            .map_err(CommandError::from).map(QueryBooksCommandResponse::new)
    }
}
