use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    #[error("Password verification failed")]
    VerifyFailed,

    #[error("Background task failed")]
    TaskFailed,

    #[error("Credential has not been hashed yet")]
    NotHashed,
}

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hashes `password` with a freshly generated salt.
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` for a wrong password, `Err` only when `hash` is malformed.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
