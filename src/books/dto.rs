use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::domain::{require_non_blank, Identifiable};
use crate::core::library::LibraryResult;
use crate::utils::date::serializer;

// BookDto is the book payload exchanged with the HTTP layer; the author is
// referenced by id only, never embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub book_id: String,
    pub version: i64,
    pub title: String,
    pub isbn: String,
    pub author_id: String,
    pub publication_date: NaiveDate,
    pub genre: String,
    pub available: bool,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, author_id: &str,
               publication_date: NaiveDate, genre: &str) -> BookDto {
        BookDto {
            book_id: Uuid::new_v4().to_string(),
            version: 0,
            title: title.to_string(),
            isbn: isbn.to_string(),
            author_id: author_id.to_string(),
            publication_date,
            genre: genre.to_string(),
            available: true,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn validate(&self) -> LibraryResult<()> {
        require_non_blank("title", self.title.as_str())?;
        require_non_blank("isbn", self.isbn.as_str())?;
        require_non_blank("genre", self.genre.as_str())?;
        require_non_blank("author_id", self.author_id.as_str())?;
        Ok(())
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}
