pub mod account_detail;
pub mod account_overview;
pub mod create_account;
