use async_trait::async_trait;

use crate::authors::repository::AuthorRepository;
use crate::books::domain::BookService;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::borrowing::domain::service::discard_book_lock;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) struct BookServiceImpl {
    book_repository: Box<dyn BookRepository>,
    author_repository: Box<dyn AuthorRepository>,
}

impl BookServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>,
                      author_repository: Box<dyn AuthorRepository>) -> Self {
        Self {
            book_repository,
            author_repository,
        }
    }
}

#[async_trait]
impl BookService for BookServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        book.validate()?;
        let _author = self.author_repository.get(book.author_id.as_str()).await?;
        let mut entity = BookEntity::from(book);
        // a new book always starts available
        entity.available = true;
        self.book_repository.create(&entity).await?;
        Ok(BookDto::from(&entity))
    }

    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        book.validate()?;
        let existing = self.book_repository.get(book.book_id.as_str()).await?;
        let _author = self.author_repository.get(book.author_id.as_str()).await?;
        let mut entity = BookEntity::from(book);
        // `available` is owned by the borrowing lifecycle; a generic update
        // keeps whatever is stored
        entity.available = existing.available;
        self.book_repository.update(&entity).await?;
        Ok(BookDto::from(&entity))
    }

    async fn remove_book(&self, id: &str) -> LibraryResult<()> {
        let book = self.book_repository.get(id).await?;
        if !book.available {
            return Err(LibraryError::bad_request(
                format!("book {} is borrowed", book.book_id).as_str()));
        }
        self.book_repository.delete(id).await?;
        discard_book_lock(id);
        Ok(())
    }

    async fn remove_books_for_author(&self, author_id: &str) -> LibraryResult<usize> {
        let books = self.book_repository.find_by_author_id(author_id).await?;
        if let Some(borrowed) = books.iter().find(|b| !b.available) {
            return Err(LibraryError::conflict(
                format!("book {} of author {} is borrowed", borrowed.book_id, author_id).as_str()));
        }
        for book in books.iter() {
            self.book_repository.delete(book.book_id.as_str()).await?;
            discard_book_lock(book.book_id.as_str());
        }
        Ok(books.len())
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }

    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.find_all().await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn search_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.find_by_title_containing(title).await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn search_by_author_id(&self, author_id: &str) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.find_by_author_id(author_id).await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn search_by_isbn(&self, isbn: &str) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.find_by_isbn(isbn).await?;
        Ok(books.iter().map(BookDto::from).collect())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> BookDto {
        BookDto {
            book_id: other.book_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            isbn: other.isbn.to_string(),
            author_id: other.author_id.to_string(),
            publication_date: other.publication_date,
            genre: other.genre.to_string(),
            available: other.available,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> BookEntity {
        BookEntity {
            book_id: other.book_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            isbn: other.isbn.to_string(),
            author_id: other.author_id.to_string(),
            publication_date: other.publication_date,
            genre: other.genre.to_string(),
            available: other.available,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
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
    use crate::borrowing::domain::BorrowingService;
    use crate::borrowing::dto::BorrowingDto;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::core::repository::RepositoryStore;
    use crate::customers::domain::CustomerService;
    use crate::customers::dto::CustomerDto;

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<Box<dyn BookService>> = AsyncOnce::new(async {
                crate::books::factory::create_book_service(&Configuration::new("test", false), RepositoryStore::InMemory).await
            });
        static ref AUTHOR_SVC: AsyncOnce<Box<dyn AuthorService>> = AsyncOnce::new(async {
                crate::authors::factory::create_author_service(&Configuration::new("test", false), RepositoryStore::InMemory).await
            });
        static ref CUSTOMER_SVC: AsyncOnce<Box<dyn CustomerService>> = AsyncOnce::new(async {
                crate::customers::factory::create_customer_service(&Configuration::new("test", false), RepositoryStore::InMemory).await
            });
        static ref BORROWING_SVC: AsyncOnce<Box<dyn BorrowingService>> = AsyncOnce::new(async {
                crate::borrowing::factory::create_borrowing_service(&Configuration::new("test", false), RepositoryStore::InMemory).await
            });
    }

    async fn added_author() -> AuthorDto {
        let author_svc = AUTHOR_SVC.get().await.clone();
        let author = AuthorDto::new("Book author", NaiveDate::from_ymd_opt(1981, 1, 1).expect("date"), "Nationality 1");
        let _ = author_svc.add_author(&author).await.expect("should add author");
        author
    }

    fn sample_book(isbn: &str, title: &str, author_id: &str) -> BookDto {
        BookDto::new(isbn, title, author_id,
                     NaiveDate::from_ymd_opt(2001, 1, 1).expect("date"), "Genre 1")
    }

    #[tokio::test]
    async fn test_should_add_and_find_book() {
        let book_svc = SUT_SVC.get().await.clone();
        let author = added_author().await;

        let book = sample_book("isbn-svc-add", "svc title", author.author_id.as_str());
        let added = book_svc.add_book(&book).await.expect("should add book");
        assert!(added.available);

        let loaded = book_svc.find_book_by_id(book.book_id.as_str()).await.expect("should return book");
        assert_eq!(book.isbn, loaded.isbn);
    }

    #[tokio::test]
    async fn test_should_reject_book_of_unknown_author() {
        let book_svc = SUT_SVC.get().await.clone();

        let book = sample_book("isbn-svc-unknown-author", "title", "no-such-author");
        assert!(matches!(book_svc.add_book(&book).await,
            Err(LibraryError::NotFound { message: _ })));
    }

    #[tokio::test]
    async fn test_should_update_book_without_touching_availability() {
        let book_svc = SUT_SVC.get().await.clone();
        let author = added_author().await;

        let mut book = sample_book("isbn-svc-update", "before", author.author_id.as_str());
        let _ = book_svc.add_book(&book).await.expect("should add book");

        book.title = "after".to_string();
        book.available = false;
        let updated = book_svc.update_book(&book).await.expect("should update book");
        assert_eq!("after", updated.title.as_str());
        // the flag from the payload is ignored
        assert!(updated.available);
    }

    #[tokio::test]
    async fn test_should_search_books() {
        let book_svc = SUT_SVC.get().await.clone();
        let author = added_author().await;

        let book = sample_book("isbn-svc-search", "A Very Peculiar Title", author.author_id.as_str());
        let _ = book_svc.add_book(&book).await.expect("should add book");

        assert_eq!(1, book_svc.search_by_title("Peculiar").await.expect("should search").len());
        assert_eq!(1, book_svc.search_by_author_id(author.author_id.as_str()).await.expect("should search").len());
        assert_eq!(1, book_svc.search_by_isbn("isbn-svc-search").await.expect("should search").len());
        assert!(book_svc.search_by_isbn("no-such-isbn").await.expect("should search").is_empty());
    }

    #[tokio::test]
    async fn test_should_refuse_removing_borrowed_book() {
        let book_svc = SUT_SVC.get().await.clone();
        let customer_svc = CUSTOMER_SVC.get().await.clone();
        let borrowing_svc = BORROWING_SVC.get().await.clone();
        let author = added_author().await;

        let book = sample_book("isbn-svc-remove-borrowed", "checked out", author.author_id.as_str());
        let _ = book_svc.add_book(&book).await.expect("should add book");
        let customer = CustomerDto::new("Customer 1", "books.remove.borrowed@example.com",
                                        "01055550001", "pw1", "Address 1");
        let _ = customer_svc.add_customer(&customer).await.expect("should add customer");
        let record = BorrowingDto::new(customer.customer_id.as_str(), book.book_id.as_str(),
                                       NaiveDate::from_ymd_opt(2024, 6, 12).expect("date"));
        let _ = borrowing_svc.borrow_book(&record).await.expect("should borrow book");

        assert!(matches!(book_svc.remove_book(book.book_id.as_str()).await,
            Err(LibraryError::BadRequest { message: _ })));
        // the book is retained and still checked out
        let loaded = book_svc.find_book_by_id(book.book_id.as_str()).await.expect("should return book");
        assert!(!loaded.available);
    }

    #[tokio::test]
    async fn test_should_remove_available_book() {
        let book_svc = SUT_SVC.get().await.clone();
        let author = added_author().await;

        let book = sample_book("isbn-svc-remove", "removable", author.author_id.as_str());
        let _ = book_svc.add_book(&book).await.expect("should add book");
        let _ = book_svc.remove_book(book.book_id.as_str()).await.expect("should remove book");
        assert!(book_svc.find_book_by_id(book.book_id.as_str()).await.is_err());
    }
}
