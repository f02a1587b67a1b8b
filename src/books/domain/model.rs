use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookEntity is the stored row for a book. `available` is the single source
// of truth for whether the book can be borrowed.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BookEntity {
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

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author_id: &str,
               publication_date: NaiveDate, genre: &str) -> Self {
        Self {
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
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::books::domain::model::BookEntity;

    #[tokio::test]
    async fn test_should_build_book() {
        let book = BookEntity::new("isbn", "title", "author1",
                                   NaiveDate::from_ymd_opt(2001, 1, 1).expect("date"), "Genre 1");
        assert_eq!("isbn", book.isbn.as_str());
        assert_eq!("title", book.title.as_str());
        assert!(book.available);
    }
}
