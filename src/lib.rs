pub mod authors;
pub mod books;
pub mod borrowing;
pub mod core;
pub mod customers;
pub mod utils;
