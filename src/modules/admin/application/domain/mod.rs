pub mod entities;

pub use entities::{AdminAccount, AdminRole, NewAdmin, Username};
