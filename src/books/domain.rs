use async_trait::async_trait;

use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

pub mod model;
pub mod service;

#[async_trait]
pub(crate) trait BookService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    // full-field replace except `available`, which only the borrowing
    // lifecycle mutates
    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    // fails with BadRequest while the book is checked out
    async fn remove_book(&self, id: &str) -> LibraryResult<()>;
    // cascade used by author removal; fails with Conflict if any of the
    // author's books is checked out
    async fn remove_books_for_author(&self, author_id: &str) -> LibraryResult<usize>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto>;
    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn search_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>>;
    async fn search_by_author_id(&self, author_id: &str) -> LibraryResult<Vec<BookDto>>;
    async fn search_by_isbn(&self, isbn: &str) -> LibraryResult<Vec<BookDto>>;
}
