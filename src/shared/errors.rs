use crate::credentials::application::ports::outgoing::HashError;

use super::domain::ValidationError;
use super::persistence::AccountRepositoryError;

/// Why a create or save did not go through. In every case nothing was
/// written and the in-memory record is as it was before the call.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SaveAccountError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Password hashing failed: {0}")]
    Hashing(#[from] HashError),

    /// Storage rejected a duplicate unique value. The message is the storage
    /// layer's own.
    #[error("{0}")]
    ConstraintViolation(String),

    #[error("Repository error: {0}")]
    Repository(AccountRepositoryError),
}

impl From<AccountRepositoryError> for SaveAccountError {
    fn from(err: AccountRepositoryError) -> Self {
        match err {
            AccountRepositoryError::ConstraintViolation(msg) => Self::ConstraintViolation(msg),
            other => Self::Repository(other),
        }
    }
}
