pub mod email;
pub mod timestamps;
pub mod validation;

pub use email::EmailAddress;
pub use timestamps::Timestamps;
pub use validation::ValidationError;
