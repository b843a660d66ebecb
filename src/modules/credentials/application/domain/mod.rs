pub mod credential;

pub use credential::{Credential, PasswordHash, PlainPassword};
