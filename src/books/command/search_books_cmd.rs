use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::books::domain::BookService;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct SearchBooksCommand {
    book_service: Box<dyn BookService>,
}

impl SearchBooksCommand {
    pub(crate) fn new(book_service: Box<dyn BookService>) -> Self {
        Self {
            book_service,
        }
    }
}

// Filters are tried in order: title, then author id, then isbn. At least one
// must be supplied.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchBooksCommandRequest {
    pub(crate) title: Option<String>,
    pub(crate) author_id: Option<String>,
    pub(crate) isbn: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let res = if let Some(title) = &req.title {
            self.book_service.search_by_title(title.as_str()).await
        } else if let Some(author_id) = &req.author_id {
            self.book_service.search_by_author_id(author_id.as_str()).await
        } else if let Some(isbn) = &req.isbn {
            self.book_service.search_by_isbn(isbn.as_str()).await
        } else {
            return Err(CommandError::BadRequest {
                message: "search requires one of title, author_id or isbn".to_string(),
            });
        };
        res.map_err(CommandError::from).map(SearchBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use chrono::NaiveDate;
    use lazy_static::lazy_static;
    use crate::authors::domain::AuthorService;
    use crate::authors::dto::AuthorDto;
    use crate::books::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::books::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
    use crate::books::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    lazy_static! {
        static ref ADD_CMD: AsyncOnce<AddBookCommand> = AsyncOnce::new(async {
                let svc = factory::create_book_service(&Configuration::new("test", false), RepositoryStore::InMemory).await;
                AddBookCommand::new(svc)
            });
        static ref SEARCH_CMD: AsyncOnce<SearchBooksCommand> = AsyncOnce::new(async {
                let svc = factory::create_book_service(&Configuration::new("test", false), RepositoryStore::InMemory).await;
                SearchBooksCommand::new(svc)
            });
        static ref AUTHOR_SVC: AsyncOnce<Box<dyn AuthorService>> = AsyncOnce::new(async {
                crate::authors::factory::create_author_service(&Configuration::new("test", false), RepositoryStore::InMemory).await
            });
    }

    #[tokio::test]
    async fn test_should_search_by_each_filter() {
        let add_cmd = ADD_CMD.get().await.clone();
        let search_cmd = SEARCH_CMD.get().await.clone();
        let author_svc = AUTHOR_SVC.get().await.clone();

        let author = AuthorDto::new("Author 1", NaiveDate::from_ymd_opt(1981, 1, 1).expect("date"), "Nationality 1");
        let _ = author_svc.add_author(&author).await.expect("should add author");
        let _ = add_cmd.execute(AddBookCommandRequest::new(
            "isbn-cmd-search", "An Entirely Searchable Book", author.author_id.as_str(),
            NaiveDate::from_ymd_opt(2001, 1, 1).expect("date"), "Genre 1"))
            .await.expect("should add book");

        let by_title = search_cmd.execute(SearchBooksCommandRequest {
            title: Some("Entirely Searchable".to_string()),
            ..Default::default()
        }).await.expect("should search by title");
        assert_eq!(1, by_title.books.len());

        let by_author = search_cmd.execute(SearchBooksCommandRequest {
            author_id: Some(author.author_id.to_string()),
            ..Default::default()
        }).await.expect("should search by author");
        assert_eq!(1, by_author.books.len());

        let by_isbn = search_cmd.execute(SearchBooksCommandRequest {
            isbn: Some("isbn-cmd-search".to_string()),
            ..Default::default()
        }).await.expect("should search by isbn");
        assert_eq!(1, by_isbn.books.len());
    }

    #[tokio::test]
    async fn test_should_reject_search_without_filters() {
        let search_cmd = SEARCH_CMD.get().await.clone();

        let res = search_cmd.execute(SearchBooksCommandRequest::default()).await;
        assert!(matches!(res, Err(CommandError::BadRequest { message: _ })));
    }
}
