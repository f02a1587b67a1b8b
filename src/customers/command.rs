pub mod add_customer_cmd;
pub mod get_customer_cmd;
pub mod query_customers_cmd;
pub mod remove_customer_cmd;
pub mod update_customer_cmd;
