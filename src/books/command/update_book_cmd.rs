use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::books::domain::BookService;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand {
    book_service: Box<dyn BookService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(book_service: Box<dyn BookService>) -> Self {
        Self {
            book_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateBookCommandRequest {
    // filled from the request path, not the body
    #[serde(default)]
    pub book_id: String,
    pub title: String,
    pub isbn: String,
    pub author_id: String,
    pub publication_date: NaiveDate,
    pub genre: String,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: &str, isbn: &str, title: &str, author_id: &str,
               publication_date: NaiveDate, genre: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
            title: title.to_string(),
            isbn: isbn.to_string(),
            author_id: author_id.to_string(),
            publication_date,
            genre: genre.to_string(),
        }
    }

    pub fn build_book(&self) -> BookDto {
        BookDto {
            book_id: self.book_id.to_string(),
            version: 0,
            title: self.title.to_string(),
            isbn: self.isbn.to_string(),
            author_id: self.author_id.to_string(),
            publication_date: self.publication_date,
            genre: self.genre.to_string(),
            available: true,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.book_service.update_book(&book).await
            .map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
