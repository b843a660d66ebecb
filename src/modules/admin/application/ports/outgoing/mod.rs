pub mod admin_query;
pub mod admin_repository;

pub use admin_query::AdminQuery;
pub use admin_repository::{AdminRecord, AdminRepository};
