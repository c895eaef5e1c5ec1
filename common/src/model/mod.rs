pub mod registration;
pub mod relation;
pub mod transaction;
pub mod user;
