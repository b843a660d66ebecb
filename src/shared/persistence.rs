use sea_orm::{DbErr, SqlErr};

/// Errors raised by the account repository and query adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountRepositoryError {
    /// A unique index rejected the write. Holds the storage message as-is.
    #[error("{0}")]
    ConstraintViolation(String),

    #[error("Account not found")]
    NotFound,

    #[error("Stored account record is invalid: {0}")]
    CorruptRecord(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

pub(crate) fn classify_db_err(err: DbErr) -> AccountRepositoryError {
    if matches!(err, DbErr::RecordNotUpdated) {
        return AccountRepositoryError::NotFound;
    }

    let message = err.to_string();

    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return AccountRepositoryError::ConstraintViolation(message);
    }

    let lowered = message.to_lowercase();
    if lowered.contains("23505")
        || lowered.contains("duplicate key")
        || lowered.contains("unique constraint")
    {
        return AccountRepositoryError::ConstraintViolation(message);
    }

    AccountRepositoryError::DatabaseError(message)
}
