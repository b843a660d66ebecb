pub mod admin;
pub mod credentials;
pub mod user;
