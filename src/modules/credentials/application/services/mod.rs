pub mod credential_lifecycle;
pub mod password_hashing_service;

pub use credential_lifecycle::{CredentialLifecycle, PreparedSave};
pub use password_hashing_service::{HashingAlgorithm, PasswordHashingService};
