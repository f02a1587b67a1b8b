use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::books::domain::BookService;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    book_service: Box<dyn BookService>,
}

impl AddBookCommand {
    pub(crate) fn new(book_service: Box<dyn BookService>) -> Self {
        Self {
            book_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: String,
    pub(crate) isbn: String,
    pub(crate) author_id: String,
    pub(crate) publication_date: NaiveDate,
    pub(crate) genre: String,
}

impl AddBookCommandRequest {
    pub fn new(isbn: &str, title: &str, author_id: &str,
               publication_date: NaiveDate, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            isbn: isbn.to_string(),
            author_id: author_id.to_string(),
            publication_date,
            genre: genre.to_string(),
        }
    }

    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.isbn.as_str(), self.title.as_str(), self.author_id.as_str(),
                     self.publication_date, self.genre.as_str())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.book_service.add_book(&book).await
            .map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
