pub mod domain;
pub mod errors;
pub mod persistence;

pub use errors::SaveAccountError;
pub use persistence::AccountRepositoryError;
