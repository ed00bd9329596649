pub mod account;
pub mod messages;
pub mod overview;
