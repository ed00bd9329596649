pub mod account_service;
pub mod error;
