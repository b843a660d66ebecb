pub mod entities;

pub use entities::{MobileNumber, NewUser, PersonName, UserAccount, UserRole};
