pub mod clock;
pub mod password_hasher;

pub use clock::Clock;
pub use password_hasher::{HashError, PasswordHasher};
