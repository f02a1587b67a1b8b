use chrono::{Duration, NaiveDate, Utc};
use tracing::info;

use crate::authors::dto::AuthorDto;
use crate::books::dto::BookDto;
use crate::borrowing::dto::BorrowingDto;
use crate::core::controller::AppState;
use crate::core::library::{LibraryError, LibraryResult};
use crate::customers::dto::CustomerDto;

fn seed_date(year: i32, month: u32, day: u32) -> LibraryResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| LibraryError::runtime("invalid seed date", None))
}

// Optional bootstrap routine invoked once from the process entry point. It
// loads five authors, ten books, five customers and checks six books out.
pub(crate) async fn populate(state: &AppState) -> LibraryResult<()> {
    let author_svc = crate::authors::factory::create_author_service(&state.config, state.store).await;
    let book_svc = crate::books::factory::create_book_service(&state.config, state.store).await;
    let customer_svc = crate::customers::factory::create_customer_service(&state.config, state.store).await;
    let borrowing_svc = crate::borrowing::factory::create_borrowing_service(&state.config, state.store).await;

    let mut authors = Vec::new();
    for i in 1..=5 {
        let author = AuthorDto::new(
            format!("Author {}", i).as_str(),
            seed_date(1940 + i * 10, 1, 1)?,
            format!("Nationality {}", i).as_str());
        author_svc.add_author(&author).await?;
        authors.push(author);
    }

    let mut books = Vec::new();
    for i in 1..=10usize {
        // two books per author
        let author = &authors[(i + 1) / 2 - 1];
        let book = BookDto::new(
            format!("ISBN-{}", i).as_str(),
            format!("Book {}", i).as_str(),
            author.author_id.as_str(),
            seed_date(2000 + i as i32, 1, 1)?,
            format!("Genre {}", (i % 3) + 1).as_str());
        books.push(book_svc.add_book(&book).await?);
    }

    let mut customers = Vec::new();
    for i in 1..=5 {
        let customer = CustomerDto::new(
            format!("Customer {}", i).as_str(),
            format!("customer{}@example.com", i).as_str(),
            format!("0101234567{}", i).as_str(),
            format!("password{}", i).as_str(),
            format!("Address {}", i).as_str());
        customers.push(customer_svc.add_customer(&customer).await?);
    }

    for i in 1..=6usize {
        let customer = &customers[(i + 1) / 2 - 1];
        let book = &books[i - 1];
        let record = BorrowingDto::new(
            customer.customer_id.as_str(),
            book.book_id.as_str(),
            Utc::now().date_naive() - Duration::days(i as i64));
        let _ = borrowing_svc.borrow_book(&record).await?;
    }

    info!("seeded {} authors, {} books, {} customers and 6 borrowings",
          authors.len(), books.len(), customers.len());
    Ok(())
}
