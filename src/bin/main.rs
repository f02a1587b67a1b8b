include!("../lib.rs");

use std::net::SocketAddr;

use axum::{
    routing::get,
    Router,
};
use tracing::info;

use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    utils::trace::setup_tracing();

    let config = Configuration::from_env();
    let state = AppState::new(config.clone(), RepositoryStore::InMemory);
    if state.config.seed_data {
        utils::seed::populate(&state).await?;
    }

    let app = Router::new()
        .route("/api/authors",
               get(authors::controller::find_all_authors)
                   .post(authors::controller::add_author))
        .route("/api/authors/:id",
               get(authors::controller::find_author_by_id)
                   .put(authors::controller::update_author)
                   .delete(authors::controller::remove_author))
        .route("/api/books",
               get(books::controller::find_all_books)
                   .post(books::controller::add_book))
        .route("/api/books/search", get(books::controller::search_books))
        .route("/api/books/:id",
               get(books::controller::find_book_by_id)
                   .put(books::controller::update_book)
                   .delete(books::controller::remove_book))
        .route("/api/customers",
               get(customers::controller::find_all_customers)
                   .post(customers::controller::add_customer))
        .route("/api/customers/:id",
               get(customers::controller::find_customer_by_id)
                   .put(customers::controller::update_customer)
                   .delete(customers::controller::remove_customer))
        .route("/api/borrowings",
               get(borrowing::controller::find_all_records)
                   .post(borrowing::controller::borrow_book))
        .route("/api/borrowings/search", get(borrowing::controller::search_records))
        .route("/api/borrowings/:id",
               get(borrowing::controller::find_record_by_id)
                   .put(borrowing::controller::update_borrowing)
                   .delete(borrowing::controller::return_book))
        .with_state(state);

    let addr: SocketAddr = config.bind_addr.parse()?;
    info!("listening on {}", addr);
    axum::Server::bind(&addr).serve(app.into_make_service()).await?;
    Ok(())
}
