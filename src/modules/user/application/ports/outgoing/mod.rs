pub mod user_query;
pub mod user_repository;

pub use user_query::UserQuery;
pub use user_repository::{UserRecord, UserRepository};
