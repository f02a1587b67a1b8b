pub mod borrow_book_cmd;
pub mod get_borrowing_cmd;
pub mod query_borrowings_cmd;
pub mod return_book_cmd;
pub mod search_borrowings_cmd;
pub mod update_borrowing_cmd;
