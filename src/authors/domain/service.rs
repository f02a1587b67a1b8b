use async_trait::async_trait;

use crate::authors::domain::AuthorService;
use crate::authors::domain::model::AuthorEntity;
use crate::authors::dto::AuthorDto;
use crate::authors::repository::AuthorRepository;
use crate::books::domain::BookService;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

pub(crate) struct AuthorServiceImpl {
    author_repository: Box<dyn AuthorRepository>,
    book_service: Box<dyn BookService>,
}

impl AuthorServiceImpl {
    pub(crate) fn new(_config: &Configuration, author_repository: Box<dyn AuthorRepository>,
                      book_service: Box<dyn BookService>) -> Self {
        Self {
            author_repository,
            book_service,
        }
    }
}

#[async_trait]
impl AuthorService for AuthorServiceImpl {
    async fn add_author(&self, author: &AuthorDto) -> LibraryResult<()> {
        author.validate()?;
        self.author_repository.create(&AuthorEntity::from(author)).await.map(|_| ())
    }

    async fn update_author(&self, author: &AuthorDto) -> LibraryResult<()> {
        author.validate()?;
        self.author_repository.update(&AuthorEntity::from(author)).await.map(|_| ())
    }

    async fn remove_author(&self, id: &str) -> LibraryResult<()> {
        let author = self.author_repository.get(id).await?;
        // cascade is refused while any of the author's books is checked out,
        // so the no-delete-while-borrowed rule holds transitively
        self.book_service.remove_books_for_author(author.author_id.as_str()).await?;
        self.author_repository.delete(id).await.map(|_| ())
    }

    async fn find_author_by_id(&self, id: &str) -> LibraryResult<AuthorDto> {
        self.author_repository.get(id).await.map(|a| AuthorDto::from(&a))
    }

    async fn find_all_authors(&self) -> LibraryResult<Vec<AuthorDto>> {
        let authors = self.author_repository.find_all().await?;
        Ok(authors.iter().map(AuthorDto::from).collect())
    }
}

impl From<&AuthorEntity> for AuthorDto {
    fn from(other: &AuthorEntity) -> AuthorDto {
        AuthorDto {
            author_id: other.author_id.to_string(),
            version: other.version,
            name: other.name.to_string(),
            birth_date: other.birth_date,
            nationality: other.nationality.to_string(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&AuthorDto> for AuthorEntity {
    fn from(other: &AuthorDto) -> AuthorEntity {
        AuthorEntity {
            author_id: other.author_id.to_string(),
            version: other.version,
            name: other.name.to_string(),
            birth_date: other.birth_date,
            nationality: other.nationality.to_string(),
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
    use crate::authors::factory;
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
        static ref SUT_SVC: AsyncOnce<Box<dyn AuthorService>> = AsyncOnce::new(async {
                factory::create_author_service(&Configuration::new("test", false), RepositoryStore::InMemory).await
            });
        static ref BOOK_SVC: AsyncOnce<Box<dyn BookService>> = AsyncOnce::new(async {
                crate::books::factory::create_book_service(&Configuration::new("test", false), RepositoryStore::InMemory).await
            });
        static ref CUSTOMER_SVC: AsyncOnce<Box<dyn CustomerService>> = AsyncOnce::new(async {
                crate::customers::factory::create_customer_service(&Configuration::new("test", false), RepositoryStore::InMemory).await
            });
        static ref BORROWING_SVC: AsyncOnce<Box<dyn BorrowingService>> = AsyncOnce::new(async {
                crate::borrowing::factory::create_borrowing_service(&Configuration::new("test", false), RepositoryStore::InMemory).await
            });
    }

    fn sample_author(name: &str) -> AuthorDto {
        AuthorDto::new(name, NaiveDate::from_ymd_opt(1981, 1, 1).expect("date"), "Nationality 1")
    }

    #[tokio::test]
    async fn test_should_add_and_find_author() {
        let author_svc = SUT_SVC.get().await.clone();

        let author = sample_author("Author add");
        let _ = author_svc.add_author(&author).await.expect("should add author");

        let loaded = author_svc.find_author_by_id(author.author_id.as_str()).await.expect("should return author");
        assert_eq!(author.name, loaded.name);
        assert!(!author_svc.find_all_authors().await.expect("should list authors").is_empty());
    }

    #[tokio::test]
    async fn test_should_update_author() {
        let author_svc = SUT_SVC.get().await.clone();

        let mut author = sample_author("Author update");
        let _ = author_svc.add_author(&author).await.expect("should add author");

        author.name = "Author renamed".to_string();
        let _ = author_svc.update_author(&author).await.expect("should update author");

        let loaded = author_svc.find_author_by_id(author.author_id.as_str()).await.expect("should return author");
        assert_eq!("Author renamed", loaded.name.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_invalid_author() {
        let author_svc = SUT_SVC.get().await.clone();

        let author = sample_author("");
        assert!(matches!(author_svc.add_author(&author).await,
            Err(LibraryError::Validation { message: _, reason_code: _ })));
    }

    #[tokio::test]
    async fn test_should_remove_author_with_books() {
        let author_svc = SUT_SVC.get().await.clone();
        let book_svc = BOOK_SVC.get().await.clone();

        let author = sample_author("Author remove");
        let _ = author_svc.add_author(&author).await.expect("should add author");
        let book = BookDto::new("isbn-author-remove", "title", author.author_id.as_str(),
                                NaiveDate::from_ymd_opt(2001, 1, 1).expect("date"), "Genre 1");
        let _ = book_svc.add_book(&book).await.expect("should add book");

        let _ = author_svc.remove_author(author.author_id.as_str()).await.expect("should remove author");
        assert!(author_svc.find_author_by_id(author.author_id.as_str()).await.is_err());
        assert!(book_svc.find_book_by_id(book.book_id.as_str()).await.is_err());
    }

    #[tokio::test]
    async fn test_should_refuse_removing_author_with_borrowed_book() {
        let author_svc = SUT_SVC.get().await.clone();
        let book_svc = BOOK_SVC.get().await.clone();
        let customer_svc = CUSTOMER_SVC.get().await.clone();
        let borrowing_svc = BORROWING_SVC.get().await.clone();

        let author = sample_author("Author borrowed");
        let _ = author_svc.add_author(&author).await.expect("should add author");
        let book = BookDto::new("isbn-author-borrowed", "title", author.author_id.as_str(),
                                NaiveDate::from_ymd_opt(2001, 1, 1).expect("date"), "Genre 1");
        let _ = book_svc.add_book(&book).await.expect("should add book");
        let customer = CustomerDto::new("Customer 1", "author.borrowed@example.com",
                                        "01012345001", "pw1", "Address 1");
        let _ = customer_svc.add_customer(&customer).await.expect("should add customer");
        let record = BorrowingDto::new(customer.customer_id.as_str(), book.book_id.as_str(),
                                       NaiveDate::from_ymd_opt(2024, 6, 12).expect("date"));
        let _ = borrowing_svc.borrow_book(&record).await.expect("should borrow book");

        assert!(matches!(author_svc.remove_author(author.author_id.as_str()).await,
            Err(LibraryError::Conflict { message: _ })));
        // the author and the borrowed book are both retained
        assert!(author_svc.find_author_by_id(author.author_id.as_str()).await.is_ok());
        assert!(book_svc.find_book_by_id(book.book_id.as_str()).await.is_ok());
    }
}
